use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::SESSION_COOKIE;
use crate::modules::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Login request from client
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Username
    #[schema(example = "alice")]
    pub username: String,

    /// Password
    #[schema(example = "correct horse battery")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Authenticated user information
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Display name
    #[schema(example = "Alice Doe")]
    name: String,

    /// Username
    #[schema(example = "alice")]
    username: String,

    /// Email address
    #[schema(example = "alice@example.com")]
    email: String,
}

/// User login
///
/// Authenticates with username and password. On success a server-side session
/// is created and its token returned as an HttpOnly cookie.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful; session cookie set",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "name": "Alice Doe",
                        "username": "alice",
                        "email": "alice@example.com"
                    }
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.login_user_use_case;
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match use_case.execute(request).await {
        Ok(response) => {
            info!(
                user_id = %response.user.id,
                username = %response.user.username,
                "User logged in"
            );

            let cookie = Cookie::build(SESSION_COOKIE, response.session_token.clone())
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish();

            HttpResponse::Ok()
                .cookie(cookie)
                .json(ApiResponse::success_body(LoginResponse {
                    user: LoginUserInfo {
                        id: response.user.id.to_string(),
                        name: response.user.name,
                        username: response.user.username,
                        email: response.user.email,
                    },
                }))
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::SessionCreationFailed(ref e)) => {
            error!(error = %e, "Session creation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "User lookup failed");
            ApiResponse::internal_error()
        }
    }
}

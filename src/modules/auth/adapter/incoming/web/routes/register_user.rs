use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::register_user::{
    RegisterRequest, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Registration request from client
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    /// Display name
    #[schema(example = "Alice Doe")]
    pub name: String,

    /// Email address
    #[schema(example = "alice@example.com")]
    pub email: String,

    /// Username used for login
    #[schema(example = "alice")]
    pub username: String,

    /// Password (min 8 characters)
    #[schema(example = "correct horse battery")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub username: String,
}

/// Register a new user
///
/// Creates an account with a hashed password. Username and email must be
/// unique.
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<RegisterResponse>)),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 409, description = "Username or email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.register_user_use_case;
    let dto = req.into_inner();

    info!(username = %dto.username, "Registration attempt");

    let request = match RegisterRequest::new(dto.name, dto.email, dto.username, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match use_case.execute(request).await {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "User registered");

            ApiResponse::created(RegisterResponse {
                id: user.id.to_string(),
                name: user.name,
                email: user.email,
                username: user.username,
            })
        }

        Err(RegisterUserError::UsernameAlreadyExists) => {
            warn!("Registration failed: username taken");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already in use")
        }

        Err(RegisterUserError::EmailAlreadyExists) => {
            warn!("Registration failed: email taken");
            ApiResponse::conflict("EMAIL_TAKEN", "Email already in use")
        }

        Err(RegisterUserError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterUserError::RepositoryError(ref e)) => {
            error!(error = %e, "User insert failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubRegisterUserUseCase;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn body(username: &str, email: &str) -> serde_json::Value {
        serde_json::json!({
            "name": "Alice Doe",
            "email": email,
            "username": username,
            "password": "password123"
        })
    }

    #[actix_web::test]
    async fn test_register_created() {
        let state = TestAppStateBuilder::default()
            .with_register_user(Arc::new(StubRegisterUserUseCase::succeeding()))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(body("alice", "alice@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["username"], "alice");
    }

    #[actix_web::test]
    async fn test_register_username_conflict() {
        let state = TestAppStateBuilder::default()
            .with_register_user(Arc::new(StubRegisterUserUseCase::failing(
                RegisterUserError::UsernameAlreadyExists,
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(body("alice", "alice@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 409);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "USERNAME_TAKEN");
    }

    #[actix_web::test]
    async fn test_register_email_conflict() {
        let state = TestAppStateBuilder::default()
            .with_register_user(Arc::new(StubRegisterUserUseCase::failing(
                RegisterUserError::EmailAlreadyExists,
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(body("alice", "alice@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 409);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "EMAIL_TAKEN");
    }

    #[actix_web::test]
    async fn test_register_invalid_email_rejected() {
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(body("alice", "not-an-email"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_register_overlong_username_rejected() {
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        // Longer than the username column allows; must fail validation, not
        // reach the database.
        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(body(&"a".repeat(60), "alice@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_register_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_register_user(Arc::new(StubRegisterUserUseCase::failing(
                RegisterUserError::RepositoryError("db down".to_string()),
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(body("alice", "alice@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}

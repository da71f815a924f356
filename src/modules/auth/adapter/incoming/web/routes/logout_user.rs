use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::{SessionUser, SESSION_COOKIE};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::cookie::Cookie;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};

use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    #[schema(example = "Logged out")]
    pub message: String,
}

/// Log out
///
/// Revokes the server-side session and clears the session cookie.
#[utoipa::path(
    get,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session revoked", body = inline(SuccessResponse<LogoutResponse>)),
        (status = 401, description = "No active session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/logout")]
pub async fn logout_user_handler(
    session: SessionUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.logout_use_case;

    match use_case.execute(&session.session_token).await {
        Ok(()) => {
            info!(user_id = %session.user_id, "User logged out");

            let mut removal = Cookie::new(SESSION_COOKIE, "");
            removal.set_path("/");
            removal.make_removal();

            HttpResponse::Ok()
                .cookie(removal)
                .json(ApiResponse::success_body(LogoutResponse {
                    message: "Logged out".to_string(),
                }))
        }

        Err(e) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}

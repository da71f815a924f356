use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, LogoutResponse, RegisterRequestDto,
    RegisterResponse,
};

// Posts
use crate::post::adapter::incoming::web::routes::{
    CreatePostDto, EditPostDto, FeedItemView, PostView,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tintero Blog API",
        version = "1.0.0",
        description = "API documentation for the Tintero multi-user blog",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,

        // Post endpoints
        crate::post::adapter::incoming::web::routes::get_feed_handler,
        crate::post::adapter::incoming::web::routes::get_dashboard_handler,
        crate::post::adapter::incoming::web::routes::create_post_handler,
        crate::post::adapter::incoming::web::routes::edit_post_handler,
        crate::post::adapter::incoming::web::routes::delete_post_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequestDto,
            RegisterResponse,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            LogoutResponse,

            // Post DTOs
            CreatePostDto,
            EditPostDto,
            FeedItemView,
            PostView
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and session endpoints"),
        (name = "posts", description = "Feed, dashboard and post management endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "SessionCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("session_id"))),
            )
        }
    }
}

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::SessionUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::post::application::use_cases::delete_post::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
struct DeletePostResponse {
    /// Confirmation message
    #[schema(example = "Post deleted")]
    message: String,
}

/// Delete a post
///
/// Deletes a post owned by the session user. Deleting another user's post is
/// forbidden and leaves it in place.
#[utoipa::path(
    get,
    path = "/delete/{post_id}",
    tag = "posts",
    params(
        ("post_id" = Uuid, Path, description = "ID of the post to delete")
    ),
    responses(
        (
            status = 200,
            description = "Post deleted",
            body = inline(SuccessResponse<DeletePostResponse>)
        ),
        (status = 401, description = "Login required", body = ErrorResponse),
        (status = 403, description = "Post belongs to another user", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/delete/{post_id}")]
pub async fn delete_post_handler(
    session: SessionUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let owner = UserId::from(session.user_id);

    match data.delete_post_use_case.execute(owner, post_id).await {
        Ok(()) => {
            info!(user_id = %session.user_id, post_id = %post_id, "Post deleted");
            ApiResponse::success(DeletePostResponse {
                message: "Post deleted".to_string(),
            })
        }

        Err(DeletePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(DeletePostError::NotOwner) => {
            warn!(user_id = %session.user_id, post_id = %post_id, "Delete denied: not the owner");
            ApiResponse::forbidden("NOT_POST_OWNER", "You can only delete your own posts")
        }

        Err(DeletePostError::RepositoryError(ref e)) => {
            error!(user_id = %session.user_id, post_id = %post_id, error = %e, "Post deletion failed");
            ApiResponse::internal_error()
        }
    }
}

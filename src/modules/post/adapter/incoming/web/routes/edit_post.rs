use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::SessionUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::post::application::use_cases::create_post::PostDraft;
use crate::modules::post::application::use_cases::update_post::UpdatePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::dashboard::PostView;

/// Replacement title and content for an existing post
#[derive(Serialize, Deserialize, ToSchema)]
pub struct EditPostDto {
    /// New post title
    #[schema(example = "Revised title")]
    pub title: String,

    /// New post body
    pub content: String,
}

/// Edit a post
///
/// Replaces the title and content of a post owned by the session user.
/// Editing another user's post is forbidden and leaves it unchanged.
#[utoipa::path(
    post,
    path = "/edit/{post_id}",
    tag = "posts",
    request_body = EditPostDto,
    params(
        ("post_id" = Uuid, Path, description = "ID of the post to edit")
    ),
    responses(
        (
            status = 200,
            description = "Post updated",
            body = inline(SuccessResponse<PostView>)
        ),
        (status = 400, description = "Empty title or content, or title too long", body = ErrorResponse),
        (status = 401, description = "Login required", body = ErrorResponse),
        (
            status = 403,
            description = "Post belongs to another user",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "NOT_POST_OWNER",
                    "message": "You can only edit your own posts"
                }
            })
        ),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/edit/{post_id}")]
pub async fn edit_post_handler(
    session: SessionUser,
    path: web::Path<Uuid>,
    req: web::Json<EditPostDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let dto = req.into_inner();

    let draft = match PostDraft::new(dto.title, dto.content) {
        Ok(draft) => draft,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    let owner = UserId::from(session.user_id);

    match data.update_post_use_case.execute(owner, post_id, draft).await {
        Ok(post) => {
            info!(user_id = %session.user_id, post_id = %post.id, "Post updated");
            ApiResponse::success(PostView::from(post))
        }

        Err(UpdatePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(UpdatePostError::NotOwner) => {
            warn!(user_id = %session.user_id, post_id = %post_id, "Edit denied: not the owner");
            ApiResponse::forbidden("NOT_POST_OWNER", "You can only edit your own posts")
        }

        Err(UpdatePostError::RepositoryError(ref e)) => {
            error!(user_id = %session.user_id, post_id = %post_id, error = %e, "Post update failed");
            ApiResponse::internal_error()
        }
    }
}

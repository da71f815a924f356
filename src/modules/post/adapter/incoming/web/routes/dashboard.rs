use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::SessionUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::post_query::OwnPostItem;
use crate::modules::post::application::ports::outgoing::post_repository::PostResult;
use crate::modules::post::application::use_cases::create_post::{CreatePostError, PostDraft};
use crate::modules::post::application::use_cases::get_own_posts::GetOwnPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

/// New post submitted from the dashboard
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatePostDto {
    /// Post title
    #[schema(example = "My first post")]
    pub title: String,

    /// Post body
    #[schema(example = "Hello, world.")]
    pub content: String,
}

/// A post as shown on the owner's dashboard
#[derive(Serialize, ToSchema)]
pub struct PostView {
    /// Post ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,

    /// Last edit timestamp (UTC)
    pub updated_at: DateTime<Utc>,
}

impl From<OwnPostItem> for PostView {
    fn from(item: OwnPostItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            content: item.content,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<PostResult> for PostView {
    fn from(post: PostResult) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Dashboard listing
///
/// Lists the session user's own posts, newest first. Requires a session.
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "posts",
    responses(
        (
            status = 200,
            description = "The session user's posts, newest first",
            body = inline(SuccessResponse<Vec<PostView>>)
        ),
        (status = 401, description = "Login required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/dashboard")]
pub async fn get_dashboard_handler(
    session: SessionUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(session.user_id);

    match data.get_own_posts_use_case.execute(owner).await {
        Ok(items) => {
            let views: Vec<PostView> = items.into_iter().map(PostView::from).collect();
            ApiResponse::success(views)
        }

        Err(GetOwnPostsError::QueryError(ref e)) => {
            error!(user_id = %session.user_id, error = %e, "Dashboard query failed");
            ApiResponse::internal_error()
        }
    }
}

/// Create a post
///
/// Creates a new post owned by the session user. Requires a session.
#[utoipa::path(
    post,
    path = "/dashboard",
    tag = "posts",
    request_body = CreatePostDto,
    responses(
        (
            status = 201,
            description = "Post created",
            body = inline(SuccessResponse<PostView>),
            example = json!({
                "success": true,
                "data": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "title": "My first post",
                    "content": "Hello, world.",
                    "created_at": "2026-01-01T00:00:00Z",
                    "updated_at": "2026-01-01T00:00:00Z"
                }
            })
        ),
        (status = 400, description = "Empty title or content, or title too long", body = ErrorResponse),
        (status = 401, description = "Login required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/dashboard")]
pub async fn create_post_handler(
    session: SessionUser,
    req: web::Json<CreatePostDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let draft = match PostDraft::new(dto.title, dto.content) {
        Ok(draft) => draft,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    let owner = UserId::from(session.user_id);

    match data.create_post_use_case.execute(owner, draft).await {
        Ok(post) => {
            info!(user_id = %session.user_id, post_id = %post.id, "Post created");
            ApiResponse::created(PostView::from(post))
        }

        Err(CreatePostError::RepositoryError(ref e)) => {
            error!(user_id = %session.user_id, error = %e, "Post creation failed");
            ApiResponse::internal_error()
        }
    }
}

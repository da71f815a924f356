use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::post::application::ports::outgoing::post_query::FeedItem;
use crate::modules::post::application::use_cases::get_feed::GetFeedError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

/// A post on the public feed
#[derive(Serialize, ToSchema)]
pub struct FeedItemView {
    /// Post ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,

    /// Post title
    #[schema(example = "My first post")]
    pub title: String,

    /// Post body
    pub content: String,

    /// Username of the post's owner
    #[schema(example = "alice")]
    pub author: String,

    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

impl From<FeedItem> for FeedItemView {
    fn from(item: FeedItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            content: item.content,
            author: item.author,
            created_at: item.created_at,
        }
    }
}

/// Public feed
///
/// Lists every post from every user, newest first. No session required.
#[utoipa::path(
    get,
    path = "/",
    tag = "posts",
    responses(
        (
            status = 200,
            description = "All posts, newest first",
            body = inline(SuccessResponse<Vec<FeedItemView>>)
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/")]
pub async fn get_feed_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_feed_use_case.execute().await {
        Ok(items) => {
            let views: Vec<FeedItemView> = items.into_iter().map(FeedItemView::from).collect();
            ApiResponse::success(views)
        }

        Err(GetFeedError::QueryError(ref e)) => {
            error!(error = %e, "Feed query failed");
            ApiResponse::internal_error()
        }
    }
}

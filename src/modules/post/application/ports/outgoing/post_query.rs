// src/modules/post/application/ports/outgoing/post_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// A post as shown on the public feed, joined with its owner's username.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// A post as shown on the owner's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnPostItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Query-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostQuery: Send + Sync {
    /// All posts, newest first.
    async fn list_all(&self) -> Result<Vec<FeedItem>, PostQueryError>;

    /// Posts owned by `owner`, newest first.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<OwnPostItem>, PostQueryError>;
}

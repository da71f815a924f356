// src/modules/post/application/ports/outgoing/post_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostRepositoryError {
    /// No post with that id exists.
    #[error("Post not found")]
    NotFound,

    /// The post exists but belongs to someone else; nothing was mutated.
    #[error("Post belongs to another user")]
    NotOwner,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Command DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub owner: UserId,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostResult {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, data: CreatePostData) -> Result<PostResult, PostRepositoryError>;

    /// Owner-only: mutates title/content iff `owner` created the post.
    async fn update_post(
        &self,
        owner: UserId,
        post_id: Uuid,
        title: String,
        content: String,
    ) -> Result<PostResult, PostRepositoryError>;

    /// Owner-only: deletes iff `owner` created the post.
    async fn delete_post(&self, owner: UserId, post_id: Uuid)
        -> Result<(), PostRepositoryError>;
}

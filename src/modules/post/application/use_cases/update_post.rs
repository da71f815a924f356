use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::post_repository::{
    PostRepository, PostRepositoryError, PostResult,
};

use super::create_post::PostDraft;

#[derive(Debug, Clone)]
pub enum UpdatePostError {
    NotFound,
    NotOwner,
    RepositoryError(String),
}

impl std::fmt::Display for UpdatePostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdatePostError::NotFound => write!(f, "Post not found"),
            UpdatePostError::NotOwner => write!(f, "Post belongs to another user"),
            UpdatePostError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdatePostError {}

#[async_trait]
pub trait IUpdatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        post_id: Uuid,
        draft: PostDraft,
    ) -> Result<PostResult, UpdatePostError>;
}

#[derive(Clone)]
pub struct UpdatePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdatePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdatePostUseCase for UpdatePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        post_id: Uuid,
        draft: PostDraft,
    ) -> Result<PostResult, UpdatePostError> {
        self.repository
            .update_post(
                owner,
                post_id,
                draft.title().to_string(),
                draft.content().to_string(),
            )
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => UpdatePostError::NotFound,
                PostRepositoryError::NotOwner => UpdatePostError::NotOwner,
                PostRepositoryError::DatabaseError(msg) => UpdatePostError::RepositoryError(msg),
            })
    }
}

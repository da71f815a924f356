use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::post_repository::{
    PostRepository, PostRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeletePostError {
    NotFound,
    NotOwner,
    RepositoryError(String),
}

impl std::fmt::Display for DeletePostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeletePostError::NotFound => write!(f, "Post not found"),
            DeletePostError::NotOwner => write!(f, "Post belongs to another user"),
            DeletePostError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeletePostError {}

#[async_trait]
pub trait IDeletePostUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, post_id: Uuid) -> Result<(), DeletePostError>;
}

#[derive(Clone)]
pub struct DeletePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeletePostUseCase for DeletePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, post_id: Uuid) -> Result<(), DeletePostError> {
        self.repository
            .delete_post(owner, post_id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => DeletePostError::NotFound,
                PostRepositoryError::NotOwner => DeletePostError::NotOwner,
                PostRepositoryError::DatabaseError(msg) => DeletePostError::RepositoryError(msg),
            })
    }
}

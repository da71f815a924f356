use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::post_query::{
    OwnPostItem, PostQuery, PostQueryError,
};

#[derive(Debug, Clone)]
pub enum GetOwnPostsError {
    QueryError(String),
}

impl std::fmt::Display for GetOwnPostsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetOwnPostsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for GetOwnPostsError {}

#[async_trait]
pub trait IGetOwnPostsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<OwnPostItem>, GetOwnPostsError>;
}

/// Dashboard listing: the session user's posts, newest first.
#[derive(Clone)]
pub struct GetOwnPostsUseCase<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetOwnPostsUseCase<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetOwnPostsUseCase for GetOwnPostsUseCase<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<OwnPostItem>, GetOwnPostsError> {
        self.query
            .list_by_owner(owner)
            .await
            .map_err(|e| GetOwnPostsError::QueryError(e.to_string()))
    }
}

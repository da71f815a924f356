use async_trait::async_trait;

use crate::modules::post::application::ports::outgoing::post_query::{
    FeedItem, PostQuery, PostQueryError,
};

#[derive(Debug, Clone)]
pub enum GetFeedError {
    QueryError(String),
}

impl std::fmt::Display for GetFeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetFeedError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for GetFeedError {}

#[async_trait]
pub trait IGetFeedUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<FeedItem>, GetFeedError>;
}

/// The public feed: every post, with its owner's username, newest first.
/// Ordering comes from the query adapter; this layer just passes it through.
#[derive(Clone)]
pub struct GetFeedUseCase<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetFeedUseCase<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetFeedUseCase for GetFeedUseCase<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<FeedItem>, GetFeedError> {
        self.query
            .list_all()
            .await
            .map_err(|e| GetFeedError::QueryError(e.to_string()))
    }
}

pub mod post_query;
pub mod post_repository;

pub use post_query::{FeedItem, OwnPostItem, PostQuery, PostQueryError};
pub use post_repository::{CreatePostData, PostRepository, PostRepositoryError, PostResult};

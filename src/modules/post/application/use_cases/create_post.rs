use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::post::application::ports::outgoing::post_repository::{
    CreatePostData, PostRepository, PostRepositoryError, PostResult,
};

const MAX_TITLE_LEN: usize = 200;

// ========================= Post Draft =========================
/// Validated title + content pair, shared by create and update.
#[derive(Debug, Clone)]
pub struct PostDraft {
    title: String,
    content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostDraftError {
    EmptyTitle,
    TitleTooLong,
    EmptyContent,
}

impl std::fmt::Display for PostDraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostDraftError::EmptyTitle => write!(f, "Title cannot be empty"),
            PostDraftError::TitleTooLong => {
                write!(f, "Title cannot exceed {} characters", MAX_TITLE_LEN)
            }
            PostDraftError::EmptyContent => write!(f, "Content cannot be empty"),
        }
    }
}

impl std::error::Error for PostDraftError {}

impl PostDraft {
    pub fn new(title: String, content: String) -> Result<Self, PostDraftError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(PostDraftError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(PostDraftError::TitleTooLong);
        }

        if content.trim().is_empty() {
            return Err(PostDraftError::EmptyContent);
        }

        Ok(Self { title, content })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

// ========================= Create Post =========================
#[derive(Debug, Clone)]
pub enum CreatePostError {
    RepositoryError(String),
}

impl std::fmt::Display for CreatePostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatePostError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreatePostError {}

#[async_trait]
pub trait ICreatePostUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, draft: PostDraft)
        -> Result<PostResult, CreatePostError>;
}

#[derive(Clone)]
pub struct CreatePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreatePostUseCase for CreatePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        draft: PostDraft,
    ) -> Result<PostResult, CreatePostError> {
        self.repository
            .create_post(CreatePostData {
                owner,
                title: draft.title().to_string(),
                content: draft.content().to_string(),
            })
            .await
            .map_err(|e| match e {
                // Inserts cannot hit the ownership errors.
                PostRepositoryError::NotFound
                | PostRepositoryError::NotOwner
                | PostRepositoryError::DatabaseError(_) => {
                    CreatePostError::RepositoryError(e.to_string())
                }
            })
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::post::adapter::outgoing::sea_orm_entity::posts::{
    ActiveModel, Entity, Model as PostModel,
};
use crate::modules::post::application::ports::outgoing::post_repository::{
    CreatePostData, PostRepository, PostRepositoryError, PostResult,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Load the post and enforce ownership. Fetch-then-check keeps NotFound
    /// and NotOwner distinct, which a filtered UPDATE could not.
    async fn find_owned(
        &self,
        owner: UserId,
        post_id: Uuid,
    ) -> Result<PostModel, PostRepositoryError> {
        let post = Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PostRepositoryError::NotFound)?;

        if post.user_id != Uuid::from(owner) {
            return Err(PostRepositoryError::NotOwner);
        }

        Ok(post)
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, data: CreatePostData) -> Result<PostResult, PostRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            content: Set(data.content),
            user_id: Set(data.owner.into()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(inserted))
    }

    async fn update_post(
        &self,
        owner: UserId,
        post_id: Uuid,
        title: String,
        content: String,
    ) -> Result<PostResult, PostRepositoryError> {
        let post = self.find_owned(owner, post_id).await?;

        let mut active: ActiveModel = post.into();
        active.title = Set(title);
        active.content = Set(content);
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(updated))
    }

    async fn delete_post(
        &self,
        owner: UserId,
        post_id: Uuid,
    ) -> Result<(), PostRepositoryError> {
        let post = self.find_owned(owner, post_id).await?;

        post.delete(&*self.db).await.map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: PostModel) -> PostResult {
    PostResult {
        id: model.id,
        owner: UserId::from(model.user_id),
        title: model.title,
        content: model.content,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    }
}

fn map_db_err(e: sea_orm::DbErr) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(e.to_string())
}

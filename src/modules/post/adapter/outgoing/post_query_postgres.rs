use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::post::adapter::outgoing::sea_orm_entity::posts::{
    Column, Entity, Model as PostModel, Relation,
};
use crate::modules::post::application::ports::outgoing::post_query::{
    FeedItem, OwnPostItem, PostQuery, PostQueryError,
};

/// Row shape for the feed join; `username` comes from the users table.
#[derive(Debug, FromQueryResult)]
struct FeedRow {
    id: Uuid,
    title: String,
    content: String,
    username: String,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
}

#[derive(Clone)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn list_all(&self) -> Result<Vec<FeedItem>, PostQueryError> {
        let rows = Entity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::Title)
            .column(Column::Content)
            .column(Column::CreatedAt)
            .column_as(users::Column::Username, "username")
            .join(JoinType::InnerJoin, Relation::User.def())
            .order_by_desc(Column::CreatedAt)
            .into_model::<FeedRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(feed_row_to_item).collect())
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<OwnPostItem>, PostQueryError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(Uuid::from(owner)))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_own_item).collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn feed_row_to_item(row: FeedRow) -> FeedItem {
    FeedItem {
        id: row.id,
        title: row.title,
        content: row.content,
        author: row.username,
        created_at: row.created_at.to_utc(),
    }
}

fn model_to_own_item(model: PostModel) -> OwnPostItem {
    OwnPostItem {
        id: model.id,
        title: model.title,
        content: model.content,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    }
}

fn map_db_err(e: sea_orm::DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}

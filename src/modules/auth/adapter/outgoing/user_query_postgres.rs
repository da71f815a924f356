use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;

use super::sea_orm_entity::users::{Column, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at.to_utc(),
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, String> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(user.map(Self::map_to_user))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, String> {
        let user = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(user.map(Self::map_to_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        let user = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(user.map(Self::map_to_user))
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // Explicit row-to-domain mapping at the storage boundary.
    fn map_to_user_result(model: UserModel) -> UserResult {
        UserResult {
            id: model.id,
            name: model.name,
            email: model.email,
            username: model.username,
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            email: Set(user.email),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            created_at: Set(Utc::now().into()),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(map_unique_violation)?;

        Ok(Self::map_to_user_result(inserted))
    }
}

/// Postgres reports unique violations as SQLSTATE 23505; the constraint name
/// in the message tells us which column collided.
fn map_unique_violation(e: sea_orm::DbErr) -> UserRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        if err_str.contains("email") {
            return UserRepositoryError::EmailAlreadyExists;
        }
        return UserRepositoryError::UsernameAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

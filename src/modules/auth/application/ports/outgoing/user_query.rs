use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;

/// Read-side lookups against the user store.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, String>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, String>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String>;
}

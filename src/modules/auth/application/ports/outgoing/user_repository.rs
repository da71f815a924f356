use async_trait::async_trait;
use uuid::Uuid;

/// Input for creating a user. The password arrives here already hashed;
/// nothing below the use case ever sees a plaintext password.
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// Confirmation returned after an insert. Deliberately excludes the hash.
#[derive(Debug, Clone, PartialEq)]
pub struct UserResult {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserRepositoryError {
    UsernameAlreadyExists,
    EmailAlreadyExists,
    DatabaseError(String),
}

impl std::fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRepositoryError::UsernameAlreadyExists => write!(f, "Username already exists"),
            UserRepositoryError::EmailAlreadyExists => write!(f, "Email already exists"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for UserRepositoryError {}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError>;
}

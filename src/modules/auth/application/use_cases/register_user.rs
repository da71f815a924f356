use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher,
    user_query::UserQuery,
    user_repository::{CreateUserData, UserRepository, UserRepositoryError},
};
use email_address::EmailAddress;

const MIN_PASSWORD_LEN: usize = 8;
// Mirror the column widths so an over-long value fails validation instead of
// surfacing as a database error.
const MAX_NAME_LEN: usize = 100;
const MAX_USERNAME_LEN: usize = 50;

// ========================= Register Request =========================
/// Validated registration request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    name: String,
    email: String,
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterRequestError {
    EmptyName,
    NameTooLong,
    EmptyEmail,
    InvalidEmailFormat,
    EmptyUsername,
    UsernameTooLong,
    PasswordTooShort,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyName => write!(f, "Name cannot be empty"),
            RegisterRequestError::NameTooLong => {
                write!(f, "Name cannot exceed {} characters", MAX_NAME_LEN)
            }
            RegisterRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::EmptyUsername => write!(f, "Username cannot be empty"),
            RegisterRequestError::UsernameTooLong => {
                write!(f, "Username cannot exceed {} characters", MAX_USERNAME_LEN)
            }
            RegisterRequestError::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ),
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterRequest {
    pub fn new(
        name: String,
        email: String,
        username: String,
        password: String,
    ) -> Result<Self, RegisterRequestError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(RegisterRequestError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(RegisterRequestError::NameTooLong);
        }

        let email = Self::validate_email(email)?;

        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(RegisterRequestError::EmptyUsername);
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(RegisterRequestError::UsernameTooLong);
        }

        if password.len() < MIN_PASSWORD_LEN {
            return Err(RegisterRequestError::PasswordTooShort);
        }

        Ok(Self {
            name,
            email,
            username,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_email(email: String) -> Result<String, RegisterRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterRequestHelper {
            name: String,
            email: String,
            username: String,
            password: String,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        RegisterRequest::new(helper.name, helper.email, helper.username, helper.password)
            .map_err(serde::de::Error::custom)
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone)]
pub enum RegisterUserError {
    UsernameAlreadyExists,
    EmailAlreadyExists,
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterUserError::UsernameAlreadyExists => write!(f, "Username already in use"),
            RegisterUserError::EmailAlreadyExists => write!(f, "Email already in use"),
            RegisterUserError::HashingFailed(msg) => {
                write!(f, "Password hashing failed: {}", msg)
            }
            RegisterUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterUserError {}

// ====================== Register Response ==========================
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: String,
}

// ====================== Register Use Case ==========================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredUser, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredUser, RegisterUserError> {
        // Pre-checks give the friendlier error; the unique constraints in the
        // database remain the authority under concurrent registration.
        if let Ok(Some(_)) = self.query.find_by_username(request.username()).await {
            return Err(RegisterUserError::UsernameAlreadyExists);
        }

        if let Ok(Some(_)) = self.query.find_by_email(request.email()).await {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let created = self
            .repository
            .create_user(CreateUserData {
                name: request.name().to_string(),
                email: request.email().to_string(),
                username: request.username().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameAlreadyExists => {
                    RegisterUserError::UsernameAlreadyExists
                }
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
            })?;

        Ok(RegisteredUser {
            id: created.id,
            name: created.name,
            email: created.email,
            username: created.username,
        })
    }
}

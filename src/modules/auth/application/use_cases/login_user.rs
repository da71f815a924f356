use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher, session_store::SessionStore, user_query::UserQuery,
};

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyUsername,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyUsername => write!(f, "Username cannot be empty"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(LoginRequestError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            username: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.username, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    PasswordVerificationFailed(String),
    SessionCreationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid username or password"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::SessionCreationFailed(msg) => {
                write!(f, "Session creation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ====================== Login Response ===========================
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: uuid::Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    /// Opaque session token; the handler turns this into an HttpOnly cookie.
    pub session_token: String,
    pub user: UserInfo,
}

// ====================== Login Use Case ===========================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
    session_ttl_secs: u64,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        session_ttl_secs: u64,
    ) -> Self {
        Self {
            query,
            password_hasher,
            sessions,
            session_ttl_secs,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // Unknown username and wrong password collapse into the same error so
        // the response does not reveal which usernames exist.
        let user = self
            .query
            .find_by_username(request.username())
            .await
            .map_err(LoginError::QueryError)?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let session_token = self
            .sessions
            .create_session(user.id, self.session_ttl_secs)
            .await
            .map_err(|e| LoginError::SessionCreationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            session_token,
            user: UserInfo {
                id: user.id,
                name: user.name,
                username: user.username,
                email: user.email,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::User;
    use crate::modules::auth::application::ports::outgoing::password_hasher::HashError;
    use crate::modules::auth::application::ports::outgoing::session_store::SessionStoreError;
    use serde_json::json;
    use uuid::Uuid;

    // ==================== LoginRequest Tests ====================
    #[test]
    fn test_login_request_valid() {
        let request = LoginRequest::new("alice".to_string(), "password123".to_string());

        assert!(request.is_ok());
        let req = request.unwrap();
        assert_eq!(req.username(), "alice");
        assert_eq!(req.password(), "password123");
    }

    #[test]
    fn test_login_request_trims_username() {
        let request = LoginRequest::new("  alice  ".to_string(), "password123".to_string()).unwrap();
        assert_eq!(request.username(), "alice");
    }

    #[test]
    fn test_login_request_empty_username() {
        let result = LoginRequest::new("".to_string(), "password123".to_string());
        assert!(matches!(result, Err(LoginRequestError::EmptyUsername)));
    }

    #[test]
    fn test_login_request_empty_password() {
        let result = LoginRequest::new("alice".to_string(), "".to_string());
        assert!(matches!(result, Err(LoginRequestError::EmptyPassword)));
    }

    #[test]
    fn test_login_request_deserialize_valid() {
        let json = json!({
            "username": "alice",
            "password": "password123"
        });

        let request: LoginRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.username(), "alice");
    }

    #[test]
    fn test_login_request_deserialize_empty_username() {
        let json = json!({
            "username": "",
            "password": "password123"
        });

        let result: Result<LoginRequest, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    // ==================== LoginUserUseCase Tests ====================

    #[derive(Default)]
    struct MockUserQuery {
        user: Option<User>,
        should_fail: bool,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, String> {
            Ok(None)
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, String> {
            if self.should_fail {
                return Err("Database error".to_string());
            }

            Ok(self.user.clone().filter(|user| user.username == username))
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, String> {
            Ok(None)
        }
    }

    struct MockPasswordHasher {
        should_verify: bool,
        should_fail: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Ok("hashed_password".to_string())
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            if self.should_fail {
                return Err(HashError::VerificationFailed("boom".to_string()));
            }
            Ok(self.should_verify)
        }
    }

    struct MockSessionStore {
        should_fail: bool,
    }

    #[async_trait]
    impl SessionStore for MockSessionStore {
        async fn create_session(
            &self,
            _user_id: Uuid,
            _ttl_secs: u64,
        ) -> Result<String, SessionStoreError> {
            if self.should_fail {
                return Err(SessionStoreError::DatabaseError("redis down".to_string()));
            }
            Ok("test-session-token".to_string())
        }

        async fn find_user(&self, _token: &str) -> Result<Option<Uuid>, SessionStoreError> {
            Ok(None)
        }

        async fn revoke_session(&self, _token: &str) -> Result<(), SessionStoreError> {
            Ok(())
        }
    }

    fn create_test_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Alice Doe".to_string(),
            email: "alice@example.com".to_string(),
            username: "alice".to_string(),
            password_hash: "hashed_password".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    fn make_use_case(
        user: Option<User>,
        query_fails: bool,
        should_verify: bool,
        verify_fails: bool,
        session_fails: bool,
    ) -> LoginUserUseCase<MockUserQuery> {
        LoginUserUseCase::new(
            MockUserQuery {
                user,
                should_fail: query_fails,
            },
            Arc::new(MockPasswordHasher {
                should_verify,
                should_fail: verify_fails,
            }),
            Arc::new(MockSessionStore {
                should_fail: session_fails,
            }),
            3600,
        )
    }

    fn request() -> LoginRequest {
        LoginRequest::new("alice".to_string(), "password123".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = create_test_user();
        let use_case = make_use_case(Some(user.clone()), false, true, false, false);

        let result = use_case.execute(request()).await;

        assert!(result.is_ok(), "Expected successful login");
        let response = result.unwrap();
        assert_eq!(response.session_token, "test-session-token");
        assert_eq!(response.user.username, "alice");
        assert_eq!(response.user.id, user.id);
    }

    #[tokio::test]
    async fn test_login_unknown_username() {
        let use_case = make_use_case(None, false, true, false, false);

        let result = use_case.execute(request()).await;

        assert!(
            matches!(result, Err(LoginError::InvalidCredentials)),
            "Expected InvalidCredentials, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let use_case = make_use_case(Some(create_test_user()), false, false, false, false);

        let result = use_case.execute(request()).await;

        assert!(
            matches!(result, Err(LoginError::InvalidCredentials)),
            "Expected InvalidCredentials, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_login_query_error() {
        let use_case = make_use_case(None, true, true, false, false);

        let result = use_case.execute(request()).await;

        assert!(matches!(result, Err(LoginError::QueryError(_))));
    }

    #[tokio::test]
    async fn test_login_verification_error() {
        let use_case = make_use_case(Some(create_test_user()), false, true, true, false);

        let result = use_case.execute(request()).await;

        assert!(matches!(
            result,
            Err(LoginError::PasswordVerificationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_login_session_store_error() {
        let use_case = make_use_case(Some(create_test_user()), false, true, false, true);

        let result = use_case.execute(request()).await;

        assert!(matches!(result, Err(LoginError::SessionCreationFailed(_))));
    }
}

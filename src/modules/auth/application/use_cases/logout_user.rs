use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::session_store::SessionStore;

#[derive(Debug, Clone)]
pub enum LogoutError {
    SessionRevocationFailed(String),
}

impl std::fmt::Display for LogoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoutError::SessionRevocationFailed(msg) => {
                write!(f, "Session revocation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for LogoutError {}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, session_token: &str) -> Result<(), LogoutError>;
}

/// Revokes the server-side session record. Idempotent: logging out an already
/// expired or revoked token succeeds.
#[derive(Clone)]
pub struct LogoutUseCase {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutUseCase {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, session_token: &str) -> Result<(), LogoutError> {
        self.sessions
            .revoke_session(session_token)
            .await
            .map_err(|e| LogoutError::SessionRevocationFailed(e.to_string()))
    }
}

use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session TTL must be positive")]
    InvalidTtl,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Server-side session records: an opaque token bound to a user identity.
///
/// A session exists exactly as long as its key does; expiry in the backing
/// store is the single source of truth, no sweeper runs anywhere.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Bind a fresh opaque token to `user_id` for `ttl_secs` seconds and
    /// return the token.
    async fn create_session(&self, user_id: Uuid, ttl_secs: u64)
        -> Result<String, SessionStoreError>;

    /// Resolve a token back to the user it was issued for. `Ok(None)` means
    /// the token is unknown or has expired.
    async fn find_user(&self, token: &str) -> Result<Option<Uuid>, SessionStoreError>;

    /// Drop the session. Revoking an unknown token is not an error.
    async fn revoke_session(&self, token: &str) -> Result<(), SessionStoreError>;
}

use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::session_store::{
    SessionStore, SessionStoreError,
};

/// Redis-backed implementation of `SessionStore`.
///
/// ## Redis data model
///
/// ```text
/// auth:session:{token} -> "{user_id}"
/// ```
///
/// - Key exists ⇒ session is active
/// - TTL = session lifetime
///
/// Redis TTL is the single source of truth for expiry: a session disappears
/// when its key does, no sweeper or bookkeeping table is needed. Tokens are
/// random v4 UUIDs, so the key space is not enumerable.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Arc<Pool>,
}

impl RedisSessionStore {
    /// The pool must already be initialized and ready to use.
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(token: &str) -> String {
        format!("auth:session:{token}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionStoreError::DatabaseError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create_session(
        &self,
        user_id: Uuid,
        ttl_secs: u64,
    ) -> Result<String, SessionStoreError> {
        if ttl_secs == 0 {
            return Err(SessionStoreError::InvalidTtl);
        }

        let token = Uuid::new_v4().simple().to_string();
        let key = Self::session_key(&token);

        let mut conn = self.get_conn().await?;

        let _: () = conn
            .set_ex(&key, user_id.to_string(), ttl_secs)
            .await
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?;

        Ok(token)
    }

    async fn find_user(&self, token: &str) -> Result<Option<Uuid>, SessionStoreError> {
        let key = Self::session_key(token);

        let mut conn = self.get_conn().await?;

        let value: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?;

        match value {
            Some(raw) => {
                let user_id = Uuid::parse_str(&raw).map_err(|e| {
                    SessionStoreError::DatabaseError(format!("Corrupt session value: {}", e))
                })?;
                Ok(Some(user_id))
            }
            None => Ok(None),
        }
    }

    async fn revoke_session(&self, token: &str) -> Result<(), SessionStoreError> {
        let key = Self::session_key(token);

        let mut conn = self.get_conn().await?;

        // DEL on a missing key is a no-op, which is what logout wants.
        let _: () = conn
            .del(&key)
            .await
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

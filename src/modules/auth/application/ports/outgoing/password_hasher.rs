use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum HashError {
    HashingFailed(String),
    VerificationFailed(String),
}

impl std::fmt::Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            HashError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for HashError {}

/// Hashing is CPU-bound; implementations must not block the reactor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// Ok(false) means the password simply did not match; Err is reserved for
    /// malformed hashes and infrastructure failures.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

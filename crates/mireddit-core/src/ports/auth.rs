//! Password hashing port.

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password. The result embeds the salt and
    /// algorithm parameters (PHC string format).
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored hash. Hash format versioning
    /// is handled by the implementation.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Hashing error: {0}")]
    HashingError(String),
}

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{NewUser, User};
use crate::error::RepoError;
use crate::ports::{AuthError, PasswordService, UserRepository};

/// Minimum username length accepted at registration.
const MIN_USERNAME_LEN: usize = 2;
/// Minimum password length accepted at registration.
const MIN_PASSWORD_LEN: usize = 3;

/// A validation or lookup failure tied to a named input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Result of a login or register attempt. Success and failure are
/// mutually exclusive by construction.
#[derive(Debug, Clone)]
pub enum AuthResult {
    Success(User),
    Failure(Vec<FieldError>),
}

impl AuthResult {
    fn failure(field: &'static str, message: impl Into<String>) -> Self {
        Self::Failure(vec![FieldError::new(field, message)])
    }
}

/// Infrastructure faults crossing the user service boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// User listing, registration, and login.
pub struct UserService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }

    /// Return all users, unfiltered. Credential hashes are not redacted
    /// here; response shaping is a transport concern.
    pub async fn list(&self) -> Result<Vec<User>, RepoError> {
        self.users.find_all().await
    }

    /// Verify a username/password pair.
    ///
    /// An unknown username fails on the `username` field, a hash mismatch
    /// on the `password` field. A malformed stored hash is an
    /// infrastructure fault and propagates.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResult, ServiceError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(AuthResult::failure(
                "username",
                format!("user with username {username} doesn't exist"),
            ));
        };

        if !self.passwords.verify(password, &user.password_hash)? {
            return Ok(AuthResult::failure("password", "password is incorrect"));
        }

        Ok(AuthResult::Success(user))
    }

    /// Register a new user.
    ///
    /// Validation is fail-fast: the first violated rule is reported and the
    /// rest of the pipeline does not run. The username pre-check races with
    /// concurrent registrations; the store's unique index is the final
    /// arbiter, and a constraint violation at insert reports the same
    /// "already exists" failure.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthResult, ServiceError> {
        if username.len() < MIN_USERNAME_LEN {
            return Ok(AuthResult::failure(
                "username",
                format!("length must be at least {MIN_USERNAME_LEN}"),
            ));
        }

        if password.len() < MIN_PASSWORD_LEN {
            return Ok(AuthResult::failure(
                "password",
                format!("length must be at least {MIN_PASSWORD_LEN}"),
            ));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Ok(Self::already_exists(username));
        }

        let password_hash = self.passwords.hash(password)?;

        let user = match self
            .users
            .create(NewUser::new(username, password_hash))
            .await
        {
            Ok(user) => user,
            Err(RepoError::Constraint(_)) => return Ok(Self::already_exists(username)),
            Err(e) => return Err(e.into()),
        };

        Ok(AuthResult::Success(user))
    }

    fn already_exists(username: &str) -> AuthResult {
        AuthResult::failure(
            "username",
            format!("user with username {username} already exists"),
        )
    }
}

//! Repository-level error types.
//!
//! Expected domain failures (not-found lookups, validation violations,
//! credential mismatches) are modelled as values in the service layer,
//! never as errors. The error channel carries infrastructure faults only.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

//! Application services - the request-handling and authentication logic.
//!
//! Services receive their ports explicitly at construction; there is no
//! ambient context object. Expected domain failures (not-found lookups,
//! validation violations, credential mismatches) are returned as ordinary
//! values; infrastructure faults propagate as errors.

mod post;
mod user;

pub use post::{DeleteOutcome, PostService};
pub use user::{AuthResult, FieldError, ServiceError, UserService};

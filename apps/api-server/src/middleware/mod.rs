//! HTTP middleware.

pub mod error;

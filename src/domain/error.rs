//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid values before anything reaches the wire.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("token must not be empty")]
    EmptyToken,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unknown sharing type '{0}' (expected private, internal or public)")]
    UnknownSharingType(String),

    #[error("invalid plan: {message}")]
    InvalidPlan { message: String },
}

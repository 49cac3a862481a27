//! Application-level errors (wraps domain errors)

use serde_json::Value;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add everything that can go wrong
/// during a single request/response round-trip.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The server answered with a structured `{error, code, details?}` body.
    #[error("API Error ({code}): {message}{}", details_suffix(.details))]
    Api {
        status: u16,
        code: u32,
        message: String,
        details: Option<Value>,
    },

    /// Error status whose body is not the structured error shape.
    #[error("HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("malformed response from {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// Server-reported code for structured API errors.
    pub fn api_code(&self) -> Option<u32> {
        match self {
            ApplicationError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApplicationError::Api { status: 404, .. } | ApplicationError::Api { code: 404, .. }
        )
    }
}

fn details_suffix(details: &Option<Value>) -> String {
    match details {
        Some(details) => match serde_json::to_string_pretty(details) {
            Ok(pretty) => format!("\n{pretty}"),
            Err(_) => format!("\n{details}"),
        },
        None => String::new(),
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

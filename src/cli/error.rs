//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("Token required. Set PARASCOPE_TOKEN env var or use --token flag")]
    MissingToken,

    #[error("{failed} of {total} bulk operations failed")]
    PartialBulkFailure { failed: usize, total: usize },

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Infra(e.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::MissingToken => crate::exitcode::CONFIG,
            CliError::PartialBulkFailure { .. } => crate::exitcode::PARTIAL,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::HttpClient { .. } => crate::exitcode::SOFTWARE,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(DomainError::InvalidBaseUrl { .. })
                    | ApplicationError::Domain(DomainError::EmptyToken)
                    | ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                    ApplicationError::Api {
                        status: 401 | 403, ..
                    } => crate::exitcode::NOPERM,
                    ApplicationError::Api { .. }
                    | ApplicationError::UnexpectedStatus { .. }
                    | ApplicationError::Transport(_) => crate::exitcode::UNAVAILABLE,
                    ApplicationError::Decode { .. } => crate::exitcode::DATAERR,
                },
            },
        }
    }
}

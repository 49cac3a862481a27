//! Domain layer: wire entities, request bodies, envelopes
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod envelope;
pub mod error;
pub mod requests;
pub mod secret;

pub use entities::*;
pub use envelope::{
    failed_count, ApiErrorBody, ApiResponse, BulkCardResult, BulkItemData, Pagination,
};
pub use error::DomainError;
pub use requests::*;
pub use secret::ApiToken;

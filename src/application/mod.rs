//! Application layer: per-resource services
//!
//! This layer maps typed operations onto the HTTP transport.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};

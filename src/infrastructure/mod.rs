//! Infrastructure layer: HTTP transport and DI container
//!
//! This layer talks to the network and wires up services.

pub mod di;
pub mod error;
pub mod http;

pub use error::{InfraError, InfraResult};
pub use http::{ApiClient, ClientConfig, DEFAULT_BASE_URL};

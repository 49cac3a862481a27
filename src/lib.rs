//! Typed client and command-line tool for the Parascope Cloud API.
//!
//! The client lives in [`application::services`] on top of
//! [`infrastructure::http::ApiClient`]; [`infrastructure::di::ServiceContainer`]
//! wires them together for a given token and base URL.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

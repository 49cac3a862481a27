//! Application services
//!
//! One service per API resource. Each maps typed operations onto a single
//! HTTP round-trip through the shared `ApiClient`; none of them hold state.

mod cards;
mod github;
mod scopes;
mod sessions;
mod tokens;
mod workspaces;

pub use cards::CardService;
pub use github::GithubService;
pub use scopes::ScopeService;
pub use sessions::SessionService;
pub use tokens::TokenService;
pub use workspaces::WorkspaceService;

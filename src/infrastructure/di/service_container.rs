//! Service container for dependency injection
//!
//! Wires one `ApiClient` into every resource service.

use std::sync::Arc;

use crate::application::services::{
    CardService, GithubService, ScopeService, SessionService, TokenService, WorkspaceService,
};
use crate::infrastructure::{ApiClient, ClientConfig, InfraResult};

/// Typed entry point to the whole API.
///
/// The only long-lived object in a CLI invocation; rebuilt per command.
pub struct ServiceContainer {
    /// Shared transport
    pub api: Arc<ApiClient>,

    pub sessions: SessionService,
    pub tokens: TokenService,
    pub workspaces: WorkspaceService,
    pub scopes: ScopeService,
    pub cards: CardService,
    pub github: GithubService,
}

impl ServiceContainer {
    /// Create a container with a real HTTP client.
    pub fn new(config: ClientConfig) -> InfraResult<Self> {
        Ok(Self::with_client(Arc::new(ApiClient::new(config)?)))
    }

    /// Create a container around an existing client.
    pub fn with_client(api: Arc<ApiClient>) -> Self {
        Self {
            sessions: SessionService::new(Arc::clone(&api)),
            tokens: TokenService::new(Arc::clone(&api)),
            workspaces: WorkspaceService::new(Arc::clone(&api)),
            scopes: ScopeService::new(Arc::clone(&api)),
            cards: CardService::new(Arc::clone(&api)),
            github: GithubService::new(Arc::clone(&api)),
            api,
        }
    }
}

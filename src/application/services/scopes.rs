//! Scope service

use std::sync::Arc;

use tracing::instrument;

use crate::application::ApplicationResult;
use crate::domain::{CreateScopeRequest, Scope, UpdateScopeRequest, WorkspaceQuery};
use crate::infrastructure::ApiClient;

pub struct ScopeService {
    api: Arc<ApiClient>,
}

impl ScopeService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// `GET /workspaces/:id/scopes` (unpaged).
    #[instrument(skip(self))]
    pub async fn list(&self, workspace_id: &str) -> ApplicationResult<Vec<Scope>> {
        self.api
            .fetch_data(self.api.get(&format!("/workspaces/{workspace_id}/scopes")))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ApplicationResult<Scope> {
        self.api.fetch_data(self.api.get(&format!("/scopes/{id}"))).await
    }

    /// `POST /scopes?workspace_id=...` with body `{"scope": {...}}`.
    #[instrument(skip(self, request), fields(name = %request.scope.name))]
    pub async fn create(
        &self,
        workspace_id: &str,
        request: &CreateScopeRequest,
    ) -> ApplicationResult<Scope> {
        let query = WorkspaceQuery { workspace_id };
        self.api
            .fetch_data(self.api.post("/scopes").query(&query).json(request))
            .await
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: &str, request: &UpdateScopeRequest) -> ApplicationResult<Scope> {
        self.api
            .fetch_data(self.api.patch(&format!("/scopes/{id}")).json(request))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ApplicationResult<()> {
        self.api.discard(self.api.delete(&format!("/scopes/{id}"))).await
    }
}

//! Workspace service: CRUD plus bulk reorganize

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{
    ApiResponse, CreateWorkspaceRequest, ListParams, OrganizeResult, OrganizeWorkspaceRequest,
    UpdateWorkspaceRequest, Workspace,
};
use crate::infrastructure::ApiClient;

pub struct WorkspaceService {
    api: Arc<ApiClient>,
}

impl WorkspaceService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// `GET /workspaces`. Returns the full envelope so callers see `meta`.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> ApplicationResult<ApiResponse<Vec<Workspace>>> {
        let page: ApiResponse<Vec<Workspace>> =
            self.api.fetch(self.api.get("/workspaces").query(params)).await?;
        debug!("list: {} workspaces, meta={:?}", page.data.len(), page.meta);
        Ok(page)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ApplicationResult<Workspace> {
        self.api.fetch_data(self.api.get(&format!("/workspaces/{id}"))).await
    }

    #[instrument(skip(self, request), fields(name = %request.workspace.name))]
    pub async fn create(&self, request: &CreateWorkspaceRequest) -> ApplicationResult<Workspace> {
        self.api.fetch_data(self.api.post("/workspaces").json(request)).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateWorkspaceRequest,
    ) -> ApplicationResult<Workspace> {
        self.api
            .fetch_data(self.api.patch(&format!("/workspaces/{id}")).json(request))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ApplicationResult<()> {
        self.api.discard(self.api.delete(&format!("/workspaces/{id}"))).await
    }

    /// `PATCH /workspaces/:id/organize`: reposition scopes and move/reposition
    /// cards in one request.
    #[instrument(skip(self, request))]
    pub async fn organize(
        &self,
        id: &str,
        request: &OrganizeWorkspaceRequest,
    ) -> ApplicationResult<OrganizeResult> {
        debug!(
            "organize: scopes={} cards={}",
            request.scopes.as_ref().map_or(0, Vec::len),
            request.cards.as_ref().map_or(0, Vec::len)
        );
        self.api
            .fetch_data(self.api.patch(&format!("/workspaces/{id}/organize")).json(request))
            .await
    }
}

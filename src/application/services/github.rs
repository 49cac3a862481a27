//! GitHub integration service

use std::sync::Arc;

use tracing::instrument;

use crate::application::ApplicationResult;
use crate::domain::{
    ApiResponse, GithubNamespace, GithubRepo, RepoListParams, SyncAcknowledgement, SyncRequest,
};
use crate::infrastructure::ApiClient;

pub struct GithubService {
    api: Arc<ApiClient>,
}

impl GithubService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn namespaces(&self) -> ApplicationResult<Vec<GithubNamespace>> {
        self.api.fetch_data(self.api.get("/github/namespaces")).await
    }

    #[instrument(skip(self))]
    pub async fn repos(
        &self,
        params: &RepoListParams,
    ) -> ApplicationResult<ApiResponse<Vec<GithubRepo>>> {
        self.api.fetch(self.api.get("/github/repos").query(params)).await
    }

    /// Ask the server to sync an installation. Returns on acknowledgement,
    /// not on completion.
    #[instrument(skip(self))]
    pub async fn sync(&self, installation_id: &str) -> ApplicationResult<SyncAcknowledgement> {
        let body = SyncRequest { installation_id };
        self.api
            .fetch_data(self.api.post("/github/sync").json(&body))
            .await
    }
}

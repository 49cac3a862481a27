//! Card service: CRUD plus the bulk endpoint
//!
//! Card bodies are flat (no wrapping key), unlike workspaces and scopes.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::ApplicationResult;
use crate::domain::{
    failed_count, ApiResponse, BulkCardOperation, BulkCardResult, BulkCardsRequest, Card,
    CardListParams, CreateCardRequest, UpdateCardRequest, WorkspaceQuery,
};
use crate::infrastructure::ApiClient;

pub struct CardService {
    api: Arc<ApiClient>,
}

impl CardService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// `GET /workspaces/:id/cards`. Returns the full envelope so callers see `meta`.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        workspace_id: &str,
        params: &CardListParams,
    ) -> ApplicationResult<ApiResponse<Vec<Card>>> {
        self.api
            .fetch(
                self.api
                    .get(&format!("/workspaces/{workspace_id}/cards"))
                    .query(params),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ApplicationResult<Card> {
        self.api.fetch_data(self.api.get(&format!("/cards/{id}"))).await
    }

    /// `POST /cards?workspace_id=...`
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        workspace_id: &str,
        request: &CreateCardRequest,
    ) -> ApplicationResult<Card> {
        let query = WorkspaceQuery { workspace_id };
        self.api
            .fetch_data(self.api.post("/cards").query(&query).json(request))
            .await
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: &str, request: &UpdateCardRequest) -> ApplicationResult<Card> {
        self.api
            .fetch_data(self.api.patch(&format!("/cards/{id}")).json(request))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ApplicationResult<()> {
        self.api.discard(self.api.delete(&format!("/cards/{id}"))).await
    }

    /// `POST /cards/bulk?workspace_id=...`
    ///
    /// Not atomic: each result reports its own success, in input order.
    /// Item failures do not make this call fail.
    #[instrument(skip(self, operations), fields(count = operations.len()))]
    pub async fn bulk(
        &self,
        workspace_id: &str,
        operations: &[BulkCardOperation],
    ) -> ApplicationResult<Vec<BulkCardResult>> {
        let query = WorkspaceQuery { workspace_id };
        let body = BulkCardsRequest { operations };
        let results: Vec<BulkCardResult> = self
            .api
            .fetch_data(self.api.post("/cards/bulk").query(&query).json(&body))
            .await?;

        if results.len() != operations.len() {
            warn!(
                "bulk: sent {} operations, got {} results",
                operations.len(),
                results.len()
            );
        }
        debug!("bulk: {} of {} failed", failed_count(&results), results.len());
        Ok(results)
    }
}

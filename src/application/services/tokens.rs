//! Personal access token service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{CreateTokenRequest, PersonalAccessToken};
use crate::infrastructure::ApiClient;

pub struct TokenService {
    api: Arc<ApiClient>,
}

impl TokenService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ApplicationResult<Vec<PersonalAccessToken>> {
        self.api.fetch_data(self.api.get("/tokens")).await
    }

    /// Create a token. The secret is only present in this response.
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        name: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> ApplicationResult<PersonalAccessToken> {
        let body = CreateTokenRequest {
            name: name.to_string(),
            expires_at,
        };
        let pat: PersonalAccessToken = self
            .api
            .fetch_data(self.api.post("/tokens").json(&body))
            .await?;
        debug!(
            "created token id={} (secret returned: {})",
            pat.id,
            pat.token.is_some()
        );
        Ok(pat)
    }

    #[instrument(skip(self))]
    pub async fn revoke(&self, id: &str) -> ApplicationResult<()> {
        self.api.discard(self.api.delete(&format!("/tokens/{id}"))).await
    }
}

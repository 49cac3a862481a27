//! Session service: password login and logout

use std::sync::Arc;

use tracing::instrument;

use crate::application::ApplicationResult;
use crate::domain::{LoginRequest, Session};
use crate::infrastructure::ApiClient;

pub struct SessionService {
    api: Arc<ApiClient>,
}

impl SessionService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// `POST /sessions`. The returned session token is not stored anywhere.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> ApplicationResult<Session> {
        let body = LoginRequest { email, password };
        self.api.fetch_data(self.api.post("/sessions").json(&body)).await
    }

    /// `DELETE /sessions`
    #[instrument(skip(self))]
    pub async fn logout(&self) -> ApplicationResult<()> {
        self.api.discard(self.api.delete("/sessions")).await
    }
}

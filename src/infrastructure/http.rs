//! HTTP transport: base URL, bearer auth, envelope unwrapping, error translation
//!
//! Every call is a single attempt. No retries, no backoff, no caching.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{ApiErrorBody, ApiResponse, ApiToken, DomainError};
use crate::infrastructure::{InfraError, InfraResult};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://app.parascope.dev/api/v1";

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub token: ApiToken,
    pub base_url: String,
}

impl ClientConfig {
    /// Config pointing at the production endpoint.
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Strip trailing slashes and require an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(DomainError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "empty".into(),
        });
    }
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(DomainError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "scheme must be http or https".into(),
        });
    }
    Ok(trimmed.to_string())
}

/// Build the underlying `reqwest` client with the auth and content-type
/// headers every request carries.
pub fn build_http_client(token: &ApiToken) -> InfraResult<reqwest::Client> {
    let mut auth = HeaderValue::from_str(&token.bearer()).map_err(|_| InfraError::HttpClient {
        message: "token contains characters not allowed in a header".into(),
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(concat!("parascope/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| InfraError::HttpClient {
            message: e.to_string(),
        })
}

/// Typed transport against one API root with one bearer token.
///
/// Holds no entity state between calls; safe to rebuild per invocation.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> InfraResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let http = build_http_client(&config.token)?;
        debug!("api client: base_url={}", base_url);
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Send the request and decode the `{data, meta?}` envelope.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApplicationResult<ApiResponse<T>> {
        let (context, response) = self.dispatch(request).await?;
        let bytes = response.bytes().await?;
        trace!("{}: {} bytes", context, bytes.len());
        serde_json::from_slice(&bytes).map_err(|source| ApplicationError::Decode { context, source })
    }

    /// Send the request and return only `data`.
    pub(crate) async fn fetch_data<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApplicationResult<T> {
        Ok(self.fetch(request).await?.into_data())
    }

    /// Send the request and ignore any success body (deletes).
    pub(crate) async fn discard(&self, request: RequestBuilder) -> ApplicationResult<()> {
        self.dispatch(request).await?;
        Ok(())
    }

    async fn dispatch(&self, request: RequestBuilder) -> ApplicationResult<(String, Response)> {
        let request = request.build()?;
        let context = format!("{} {}", request.method(), request.url().path());
        debug!("request: {}", context);

        let response = self.http.execute(request).await?;
        let status = response.status();
        debug!("response: {} -> {}", context, status);
        if status.is_success() {
            return Ok((context, response));
        }

        let body = response.text().await?;
        Err(translate_error(status.as_u16(), &body))
    }
}

/// Map an error response to [`ApplicationError`].
///
/// Structured bodies become `Api`; anything else is kept verbatim as
/// `UnexpectedStatus`.
pub fn translate_error(status: u16, body: &str) -> ApplicationError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => ApplicationError::Api {
            status,
            code: err.code,
            message: err.error,
            details: err.details,
        },
        Err(_) => ApplicationError::UnexpectedStatus {
            status,
            body: body.to_string(),
        },
    }
}

//! HTTP client for the registry service.
//!
//! Each registry method is a unary JSON call:
//! `POST {base_url}/{REGISTRY_SERVICE}/{Method}`. Errors come back as a
//! non-2xx status with a `{ "code": ..., "message": ... }` body.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use chainreg_core::assets::CreateAssetRequest;
use chainreg_core::chains::CreateChainRequest;
use chainreg_core::deployments::CreateDeploymentRequest;
use chainreg_core::errors::{Error, Result};
use chainreg_core::registry::{
    CreateOutcome, RegisteredAsset, RegistryClient, RegistryFailure, StatusCode,
};

use crate::models::{ApiErrorResponse, ApiListAssetsRequest, ApiListAssetsResponse};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of assets requested per `ListAssets` page.
const DEFAULT_PAGE_SIZE: u32 = 500;

/// Default registry endpoint for local development.
pub const DEFAULT_REGISTRY_URL: &str = "http://localhost:8080";

/// Fully qualified name of the registry RPC service.
pub const REGISTRY_SERVICE: &str = "registry.v1.RegistryService";

/// Tuning for [`RegistryApiClient`].
#[derive(Debug, Clone)]
pub struct RegistryClientConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Number of assets requested per listing page.
    pub page_size: u32,
    /// Maximum number of listing pages (safety limit).
    pub max_pages: usize,
}

impl Default for RegistryClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: 1_000,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the registry service.
///
/// # Example
///
/// ```ignore
/// let client = RegistryApiClient::new("http://localhost:8080", Some("token"))?;
/// let assets = client.list_assets().await?;
/// ```
#[derive(Debug, Clone)]
pub struct RegistryApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
    config: RegistryClientConfig,
}

impl RegistryApiClient {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token format is invalid or the HTTP
    /// client cannot be initialized.
    pub fn new(base_url: &str, access_token: Option<&str>) -> Result<Self> {
        Self::with_config(base_url, access_token, RegistryClientConfig::default())
    }

    pub fn with_config(
        base_url: &str,
        access_token: Option<&str>,
        config: RegistryClientConfig,
    ) -> Result<Self> {
        let auth_header = access_token
            .filter(|token| !token.trim().is_empty())
            .map(|token| {
                HeaderValue::from_str(&format!("Bearer {}", token.trim())).map_err(|e| {
                    Error::InvalidConfigValue(format!("Invalid access token format: {}", e))
                })
            })
            .transpose()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
            config,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}/{}", self.base_url, REGISTRY_SERVICE, method)
    }

    /// Make a unary call. Returns the HTTP status and the raw body.
    async fn call<B: Serialize + ?Sized>(
        &self,
        method: &str,
        body: &B,
    ) -> std::result::Result<(u16, String), RegistryFailure> {
        let url = self.method_url(method);
        debug!("[RegistryApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport_failure)?;
        Ok((status, text))
    }

    /// Submit a create call and classify the registry's answer.
    ///
    /// `record_field` names the response field holding the created record,
    /// e.g. `asset` for `{ "asset": { "id": "..." } }`.
    async fn create<B: Serialize>(
        &self,
        method: &str,
        record_field: &str,
        body: &B,
    ) -> Result<CreateOutcome> {
        let (status, text) = match self.call(method, body).await {
            Ok(response) => response,
            Err(failure) => return Ok(CreateOutcome::Failed(failure)),
        };

        if (200..300).contains(&status) {
            return Ok(CreateOutcome::created(created_id(&text, record_field)));
        }

        let (code, message) = error_status(status, &text);
        CreateOutcome::from_status(code, message)
    }
}

/// Map a reqwest failure onto a registry status.
fn transport_failure(err: reqwest::Error) -> RegistryFailure {
    let code = if err.is_timeout() {
        StatusCode::DeadlineExceeded
    } else {
        StatusCode::Unavailable
    };
    RegistryFailure::new(code, err.to_string())
}

/// Identifier of the created record, if the response carried one.
fn created_id(body: &str, record_field: &str) -> Option<String> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            warn!("[RegistryApi] Unreadable create response: {}", e);
            return None;
        }
    };
    value
        .get(record_field)
        .and_then(|record| record.get("id"))
        .and_then(|id| id.as_str())
        .map(str::to_string)
}

/// Extract the status code and message from an error response.
fn error_status(status: u16, body: &str) -> (StatusCode, String) {
    if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
        let code = err
            .code
            .as_deref()
            .map(StatusCode::from_wire)
            .unwrap_or_else(|| StatusCode::from_http_status(status));
        let message = err
            .message
            .or(err.error)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return (code, message);
    }

    (
        StatusCode::from_http_status(status),
        format!(
            "HTTP {}: {}",
            status,
            body.chars().take(200).collect::<String>()
        ),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// RegistryClient Trait Implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RegistryClient for RegistryApiClient {
    async fn create_chain(&self, request: CreateChainRequest) -> Result<CreateOutcome> {
        self.create("CreateChain", "chain", &request).await
    }

    async fn create_asset(&self, request: CreateAssetRequest) -> Result<CreateOutcome> {
        self.create("CreateAsset", "asset", &request).await
    }

    async fn create_asset_deployment(
        &self,
        request: CreateDeploymentRequest,
    ) -> Result<CreateOutcome> {
        self.create("CreateAssetDeployment", "deployment", &request)
            .await
    }

    /// Fetch every registered asset, following page tokens.
    async fn list_assets(&self) -> Result<Vec<RegisteredAsset>> {
        let mut assets = Vec::new();
        let mut page_token = String::new();
        let mut pages_fetched: usize = 0;

        loop {
            if pages_fetched >= self.config.max_pages {
                return Err(Error::Registry(format!(
                    "ListAssets exceeded max pages ({}). Aborting.",
                    self.config.max_pages
                )));
            }

            let request = ApiListAssetsRequest {
                page_size: self.config.page_size,
                page_token: page_token.clone(),
            };
            let (status, text) = self
                .call("ListAssets", &request)
                .await
                .map_err(|failure| Error::Registry(failure.to_string()))?;

            if !(200..300).contains(&status) {
                let (code, message) = error_status(status, &text);
                if code == StatusCode::Canceled {
                    return Err(Error::Cancelled);
                }
                return Err(Error::Registry(format!("{}: {}", code, message)));
            }

            let page: ApiListAssetsResponse = serde_json::from_str(&text).map_err(|e| {
                Error::Registry(format!("Failed to parse ListAssets response: {}", e))
            })?;
            pages_fetched += 1;

            debug!(
                "[RegistryApi] ListAssets page {} returned {} assets",
                pages_fetched,
                page.assets.len()
            );
            assets.extend(page.assets.into_iter().map(|a| RegisteredAsset {
                asset_id: a.id,
                symbol: a.symbol,
            }));

            if page.next_page_token.is_empty() {
                break;
            }
            if page.next_page_token == page_token {
                return Err(Error::Registry(
                    "ListAssets pagination appears stuck (same page token returned twice)."
                        .to_string(),
                ));
            }
            page_token = page.next_page_token;
        }

        info!("[RegistryApi] Listed {} registry assets", assets.len());
        Ok(assets)
    }
}

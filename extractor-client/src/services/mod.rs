//! HTTP client for the extraction backend.
//!
//! One async method per backend operation, grouped per resource in the
//! submodules, all sharing the request primitive defined here.

mod corrections;
mod documents;
mod extraction_fields;
mod field_definitions;
mod model_versions;
mod sessions;
mod stats;

use crate::config::ApiSettings;
use crate::error::ApiError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Fixed fallback when an error response carries no usable `detail`.
const REQUEST_FAILED: &str = "Request failed";

/// Error body shape the backend uses for failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Stateless client for the HITL Document Extractor backend.
///
/// Holds no mutable state beyond the base URL captured at construction;
/// clones share the underlying connection handling inside `reqwest`.
/// In-flight calls are independent — ordering and deduplication are the
/// caller's responsibility.
#[derive(Clone)]
pub struct ExtractorClient {
    client: Client,
    settings: ApiSettings,
}

impl ExtractorClient {
    /// Create a client for the backend at `settings.base_url`.
    ///
    /// No request timeout is configured; an unresponsive backend stalls
    /// the caller.
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.settings.base_url, endpoint)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.execute(self.client.get(self.url(endpoint)), endpoint)
            .await
    }

    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.client.post(self.url(endpoint)).json(body), endpoint)
            .await
    }

    async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.execute(self.client.post(self.url(endpoint)), endpoint)
            .await
    }

    async fn patch_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.client.patch(self.url(endpoint)).json(body), endpoint)
            .await
    }

    async fn patch_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.execute(self.client.patch(self.url(endpoint)), endpoint)
            .await
    }

    /// Shared request primitive: send, map non-success statuses to
    /// [`ApiError::Api`] using the body's `detail`, decode success bodies.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        self.execute_with_fallback(request, endpoint, REQUEST_FAILED)
            .await
    }

    async fn execute_with_fallback<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(endpoint = %endpoint, error = %e, "Request failed to complete");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(endpoint = %endpoint, error = %e, "Failed to read response body");
            ApiError::Transport(e)
        })?;

        tracing::debug!(endpoint = %endpoint, status = %status, "Backend response");

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|error| error.detail)
                .unwrap_or_else(|| fallback.to_string());
            tracing::error!(
                endpoint = %endpoint,
                status = %status,
                message = %message,
                "Backend returned error"
            );
            return Err(ApiError::Api { status, message });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(endpoint = %endpoint, error = %e, "Failed to decode response");
            ApiError::Decode(e)
        })
    }
}

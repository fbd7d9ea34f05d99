//! EstocaAI REST API client implementation.
//!
//! One [`ApiClient`] instance is shared across screens; endpoint methods are
//! grouped by API area (`houses`, `pantry`, `catalog`, `shopping_list`).
//! Every method takes the [`AuthToken`] explicitly; the client itself holds
//! no credential state.

mod catalog;
mod houses;
mod pantry;
mod shopping_list;

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::auth::AuthToken;
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Client for the EstocaAI backend.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
            }),
        }
    }

    /// Start a request against `path`, relative to the base URL.
    fn request(&self, method: Method, token: &AuthToken, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{path}", self.inner.base_url);
        self.inner
            .http
            .request(method, url)
            // The backend expects the raw token, no "Bearer " prefix
            .header("Authorization", token.expose())
    }

    /// Send a request and map non-success statuses to [`ApiError::Api`].
    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %message.chars().take(200).collect::<String>(),
                "backend returned non-success status"
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Read a response body as JSON.
    ///
    /// Reads the body as text first for better error diagnostics.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "failed to parse backend response"
            );
            ApiError::Parse(e.to_string())
        })
    }
}

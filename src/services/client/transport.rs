//! Transport seam between the compliance client and the network.
//!
//! A transport only moves bytes: it reports the status and body of whatever
//! the backend answered, and fails with [`AppError::Transport`] only when no
//! answer arrived at all. Status interpretation and decoding happen in the
//! client.

use async_trait::async_trait;
use tracing::debug;

use crate::config::BackendSettings;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Request against the backend; `path` includes the query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        ApiRequest {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        ApiRequest {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Raw backend answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request. No retries.
    async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse>;
}

/// reqwest-backed transport for the live backend.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport enforcing the configured timeouts.
    pub fn new(settings: &BackendSettings) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()?;

        Ok(HttpTransport {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        let url = self.url_for(&request.path);
        debug!("Backend request: {:?} {}", request.method, url);

        let builder = match request.method {
            Method::Get => self.http_client.get(&url),
            Method::Post => self.http_client.post(&url),
        };
        let builder = match request.body {
            Some(ref body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}

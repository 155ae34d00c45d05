//! # API Client
//!
//! The HTTP boundary with the Abide backend. `GuidanceApi` is the seam the
//! rest of the app (and the tests) program against; `HttpClient` is the
//! reqwest-backed implementation.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{ApiResponse, DevotionRequest, DevotionWire, FeelingRequest, GuidanceResponse};

/// Errors from a backend call. All of them surface to the user as the same
/// transient notification; the taxonomy exists for logging.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server reachable but answered non-2xx.
    Api { status: u16, message: String },
    /// Response body was not valid JSON of the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[async_trait]
pub trait GuidanceApi: Send + Sync {
    /// `POST /api/v1/feel` with the composed feeling text.
    async fn feel(&self, request: &FeelingRequest) -> Result<ApiResponse, ApiError>;

    /// `POST /api/v1/devotion` with an optional theme.
    async fn devotion(&self, request: &DevotionRequest) -> Result<ApiResponse, ApiError>;
}

/// reqwest-backed client talking to a single backend origin.
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// `base_url` is the backend origin, e.g. `http://localhost:8000`.
    /// Endpoint paths (`/api/v1/...`) are appended here and nowhere else.
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("POST {} failed with HTTP {}", url, status.as_u16());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl GuidanceApi for HttpClient {
    async fn feel(&self, request: &FeelingRequest) -> Result<ApiResponse, ApiError> {
        let body = self.post_json("/api/v1/feel", request).await?;
        let guidance: GuidanceResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        info!(
            "Guidance received (topic: {:?}, crisis: {})",
            guidance.topic, guidance.crisis_detected
        );
        Ok(ApiResponse::Guidance(guidance))
    }

    async fn devotion(&self, request: &DevotionRequest) -> Result<ApiResponse, ApiError> {
        let body = self.post_json("/api/v1/devotion", request).await?;
        // The crisis middleware answers this endpoint with a guidance-shaped
        // payload, so the body is parsed as an untagged union of both shapes.
        let wire: DevotionWire =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = ApiResponse::from(wire);
        info!(
            "Devotion received (crisis: {})",
            response.crisis().is_some()
        );
        Ok(response)
    }
}

//! HTTP client for the YouTube Data API
//!
//! Thin wrapper over `reqwest` that turns non-success statuses into
//! [`SweepError::ServiceError`]. Pacing lives in the scheduler, and
//! failed requests are never retried.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SweepError};
use crate::url::DEFAULT_BASE_URL;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "YT_API_KEY";

const USER_AGENT: &str = concat!("tagsweep/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// YouTube Data API key
    pub api_key: String,
    /// API root, overridable for tests (default: googleapis v3)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a configuration for `api_key` with default endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Read the API key from `YT_API_KEY`
    ///
    /// # Errors
    /// Returns `MissingApiKey` if the variable is unset or blank
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let config = Self::new(key.trim());
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot authenticate
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(SweepError::MissingApiKey);
        }
        Ok(())
    }
}

// {"error": {"code": 403, "message": "..."}}
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client wrapper for the two API endpoints
pub struct ApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Errors
    /// - `MissingApiKey` if the key is blank
    /// - `HttpError` if the underlying client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(SweepError::HttpError)?;

        Ok(Self { client, config })
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch a JSON body from `url`
    ///
    /// # Errors
    /// - `HttpError` - Network or transport failure
    /// - `ServiceError` - Any non-2xx status, with the API's message when present
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(SweepError::HttpError)?;

        let status = response.status();
        let body = response.text().await.map_err(SweepError::HttpError)?;
        debug!(status = status.as_u16(), bytes = body.len(), "api response");

        if !status.is_success() {
            return Err(SweepError::ServiceError {
                status: status.as_u16(),
                message: error_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string()),
            });
        }

        Ok(body)
    }
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
}

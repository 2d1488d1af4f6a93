// src/client/mod.rs

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::types::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("invalid response from API: {0}")]
    InvalidResponse(String),
    #[error("response did not contain a status_url")]
    MissingStatusUrl,
}

/// The shared core client every job submitter composes against. Transport,
/// auth headers, retry policy and status polling all live behind this trait;
/// submitters only build payloads and hand them over.
#[async_trait]
pub trait SharpApiCore {
    fn config(&self) -> &ClientConfig;

    /// Performs one authenticated HTTP call against `endpoint` (a path
    /// relative to the configured base URL).
    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, CoreError>;

    /// Extracts the polling URL from a successful job-submission response.
    fn parse_status_url(&self, response: &ApiResponse) -> Result<String, CoreError> {
        response
            .body
            .get("status_url")
            .and_then(|url| url.as_str())
            .map(|url| url.to_string())
            .ok_or(CoreError::MissingStatusUrl)
    }
}

// Module declarations
pub mod mocks;

// Re-export for testing
pub use mocks::MockCore;

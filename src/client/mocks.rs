use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{CoreError, SharpApiCore};
use crate::config::ClientConfig;
use crate::types::ApiResponse;

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub method: String,
    pub endpoint: String,
    pub body: serde_json::Value,
}

/// In-memory core client. Replays canned responses keyed by the payload's
/// `content` field and records every call it receives.
pub struct MockCore {
    pub config: ClientConfig,
    pub calls: Mutex<Vec<RecordedCall>>,
    responses: HashMap<String, ApiResponse>,
    fallback: ApiResponse,
    request_error: Mutex<Option<CoreError>>,
}

impl MockCore {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            calls: Mutex::new(Vec::new()),
            responses: HashMap::new(),
            fallback: ApiResponse {
                status: 200,
                body: json!({ "status_url": "https://sharpapi.com/api/v1/tth/travel_review_sentiment/job/status/mock" }),
            },
            request_error: Mutex::new(None),
        }
    }

    /// Registers a response for submissions whose payload `content` equals
    /// `content`. Submissions with no registered content get the fallback.
    pub fn with_response(mut self, content: &str, response: ApiResponse) -> Self {
        self.responses.insert(content.to_string(), response);
        self
    }

    pub fn with_status_url(mut self, content: &str, status_url: &str) -> Self {
        self.responses.insert(
            content.to_string(),
            ApiResponse {
                status: 200,
                body: json!({ "status_url": status_url }),
            },
        );
        self
    }

    /// Makes the next `request` call fail with `error`.
    pub fn with_request_error(self, error: CoreError) -> Self {
        *self.request_error.lock().unwrap() = Some(error);
        self
    }
}

#[async_trait]
impl SharpApiCore for MockCore {
    fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, CoreError> {
        let content = body
            .get("content")
            .and_then(|c| c.as_str())
            .map(|c| c.to_string());

        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            body,
        });

        if let Some(err) = self.request_error.lock().unwrap().take() {
            return Err(err);
        }

        let response = content
            .and_then(|c| self.responses.get(&c))
            .unwrap_or(&self.fallback);

        Ok(response.clone())
    }
}

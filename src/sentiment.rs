use serde_json::json;
use tracing::debug;

use crate::client::{CoreError, SharpApiCore};
use crate::types::{JobPayload, TRAVEL_REVIEW_SENTIMENT};

/// Submits travel/hospitality review text for sentiment analysis.
///
/// Each submission is a single stateless round trip: the service wraps the
/// review into a job payload, hands it to the core client, and returns the
/// status URL to poll for the eventual result. Retries, timeouts and
/// authentication are owned by the core client, not here.
pub struct TravelReviewSentimentService<C: SharpApiCore> {
    core: C,
}

impl<C: SharpApiCore> TravelReviewSentimentService<C> {
    /// Wraps an already-configured core client. No network activity happens
    /// until `submit` is called.
    pub fn new(core: C) -> Self {
        Self { core }
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    /// Parses the travel/hospitality review and provides its sentiment
    /// (POSITIVE/NEGATIVE/NEUTRAL) with a score between 0-100%. Returns the
    /// status URL for polling the job result.
    ///
    /// The text is passed through untouched; length and encoding constraints
    /// are enforced server-side.
    pub async fn submit(&self, text: &str) -> Result<String, CoreError> {
        let payload = JobPayload {
            content: text.to_string(),
        };

        debug!(
            endpoint = TRAVEL_REVIEW_SENTIMENT.endpoint,
            "submitting review sentiment job"
        );

        let response = self
            .core
            .request("POST", TRAVEL_REVIEW_SENTIMENT.endpoint, json!(payload))
            .await?;

        self.core.parse_status_url(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mocks::MockCore;
    use crate::config::ClientConfig;
    use crate::types::ApiResponse;

    #[tokio::test]
    async fn test_submit_issues_single_post_with_content_payload() {
        let core = MockCore::new(ClientConfig::new("test-key"));
        let service = TravelReviewSentimentService::new(core);

        service.submit("Lovely hotel, would stay again").await.unwrap();

        let calls = service.core().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].endpoint, "/tth/travel_review_sentiment");
        assert_eq!(
            calls[0].body,
            json!({ "content": "Lovely hotel, would stay again" })
        );
    }

    #[tokio::test]
    async fn test_submit_returns_parser_output_untouched() {
        let core = MockCore::new(ClientConfig::new("test-key")).with_status_url(
            "Great breakfast",
            "https://sharpapi.com/api/v1/tth/travel_review_sentiment/job/status/abc-123",
        );
        let service = TravelReviewSentimentService::new(core);

        let status_url = service.submit("Great breakfast").await.unwrap();

        assert_eq!(
            status_url,
            "https://sharpapi.com/api/v1/tth/travel_review_sentiment/job/status/abc-123"
        );
    }

    #[tokio::test]
    async fn test_request_error_propagates_without_retry() {
        let core = MockCore::new(ClientConfig::new("test-key"))
            .with_request_error(CoreError::Auth("invalid API key".to_string()));
        let service = TravelReviewSentimentService::new(core);

        let err = service.submit("Rooms were fine").await.unwrap_err();

        assert!(matches!(err, CoreError::Auth(_)));
        // No retry: the failed call is the only one recorded
        assert_eq!(service.core().calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_parse_error_propagates_unchanged() {
        let core = MockCore::new(ClientConfig::new("test-key")).with_response(
            "Noisy at night",
            ApiResponse {
                status: 200,
                body: json!({ "message": "accepted" }),
            },
        );
        let service = TravelReviewSentimentService::new(core);

        let err = service.submit("Noisy at night").await.unwrap_err();

        assert!(matches!(err, CoreError::MissingStatusUrl));
        assert_eq!(service.core().calls.lock().unwrap().len(), 1);
    }
}

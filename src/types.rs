// src/types.rs

use serde::{Deserialize, Serialize};

/// Pairs a job category with the endpoint path that selects which remote
/// analysis a submission targets. Defined once per job type, shared by all
/// calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobType {
    pub category: &'static str,
    pub endpoint: &'static str,
}

/// Travel/hospitality review sentiment analysis. The remote service grades
/// each review POSITIVE/NEGATIVE/NEUTRAL with a 0-100% confidence score.
pub const TRAVEL_REVIEW_SENTIMENT: JobType = JobType {
    category: "tth",
    endpoint: "/tth/travel_review_sentiment",
};

/// Body of a job-submission request. Built fresh per call, never retained.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct JobPayload {
    pub content: String,
}

// ApiResponse keeps the body as serde_json::Value so status-URL extraction
// stays independent of any one job type's result shape
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

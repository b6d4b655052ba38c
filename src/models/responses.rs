use serde::{Deserialize, Serialize};

/// Acknowledgment for a recorded swipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeResponse {
    pub message: String,
    pub id: i64,
    #[serde(rename = "match")]
    pub is_match: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
///
/// `detail` carries the human-readable failure, the field existing clients read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub error: String,
    pub status_code: u16,
}

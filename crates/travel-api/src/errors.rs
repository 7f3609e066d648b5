use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the travelling backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Backend answered {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("Login response did not contain 'access_token'")]
    MissingAccessToken,

    #[error("User not found: {0}")]
    UserNotFound(String),
}

impl ApiError {
    /// HTTP status of a rejected request, if the backend answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Request(e) => e.status(),
            _ => None,
        }
    }
}

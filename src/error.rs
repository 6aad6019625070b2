use thiserror::Error;

/// Failure taxonomy for calls against the backend API.
///
/// Every variant propagates to the immediate caller; there are no retries
/// and no partial results. Route handlers own the mapping to user-facing
/// statuses and messages.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure before a usable response arrived.
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status. `message` comes from the response body's `message`
    /// field when the body parses as JSON, otherwise `HTTP <status>`.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx status but the envelope's `code` was not 200.
    #[error("{0}")]
    Envelope(String),

    /// 2xx status with an empty body, which cannot be an envelope.
    #[error("empty response from server")]
    EmptyResponse,

    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// HTTP status attached to the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for the 401/403 responses that should end the caller's session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

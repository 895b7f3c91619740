use thiserror::Error;

/// Why a request produced no usable response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// No network, DNS failure, or connection refused.
    #[error("cannot reach backend")]
    NotConnected,

    /// Connect, read, or total deadline exceeded.
    #[error("backend timed out")]
    TimedOut,

    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {0}")]
    HttpStatus(u16),

    /// The body could not be read or is not JSON.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportFailure::TimedOut
        } else if err.is_decode() || err.is_body() {
            TransportFailure::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            TransportFailure::HttpStatus(status.as_u16())
        } else {
            TransportFailure::NotConnected
        }
    }
}

/// Errors building an [`super::HttpTransport`].
#[derive(Debug, Error)]
pub enum TransportSetupError {
    #[error("invalid backend base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

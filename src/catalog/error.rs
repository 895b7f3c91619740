use thiserror::Error;

use crate::decode::DecodeError;
use crate::transport::TransportFailure;

/// Classified failure of a repository call.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("cannot reach backend")]
    NotConnected,

    #[error("backend timed out")]
    TimedOut,

    #[error("backend returned HTTP {status}")]
    BackendError { status: u16 },

    #[error("backend returned no body")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<TransportFailure> for RepositoryError {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::NotConnected => RepositoryError::NotConnected,
            TransportFailure::TimedOut => RepositoryError::TimedOut,
            TransportFailure::HttpStatus(status) => RepositoryError::BackendError { status },
            TransportFailure::Malformed(detail) => RepositoryError::Malformed(detail),
        }
    }
}

impl RepositoryError {
    /// Message shown to the user. `resource` names what was being loaded,
    /// e.g. `tragos` or `juego`.
    pub fn user_message(&self, resource: &str) -> String {
        match self {
            RepositoryError::NotConnected => {
                "cannot reach server, check your connection".to_string()
            }
            RepositoryError::TimedOut => "server took too long, try again".to_string(),
            RepositoryError::BackendError { status } => {
                format!("error loading {}: {}", resource, status)
            }
            RepositoryError::EmptyResponse => "no data found".to_string(),
            RepositoryError::Malformed(detail) => {
                format!("invalid data for {}: {}", resource, detail)
            }
            RepositoryError::Decode(err) => format!("invalid data for {}: {}", resource, err),
        }
    }
}

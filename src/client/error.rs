use reqwest::StatusCode;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Malformed input, reported inline next to the form.
    #[error("{0}")]
    Validation(String),

    /// Login rejected by the server.
    #[error("{0}")]
    Auth(String),

    /// The held credential is no longer accepted.
    #[error("Session expired")]
    SessionExpired,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// Maps an unsuccessful response from a protected endpoint.
    pub fn from_status(status: StatusCode, detail: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Self::Validation(detail)
            }
            StatusCode::UNAUTHORIZED => Self::SessionExpired,
            StatusCode::FORBIDDEN => Self::Forbidden(detail),
            StatusCode::NOT_FOUND => Self::NotFound(detail),
            _ => Self::Api {
                status: status.as_u16(),
                detail,
            },
        }
    }

    /// Failures worth offering a retry action for.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

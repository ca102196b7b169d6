//! Error type for directory client operations.

use std::fmt;

/// Failure of a backend call.
///
/// The UI treats every variant the same way ("Failed to ..."); the split
/// exists for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never completed (connection refused, timeout, ...).
    Network(String),
    /// The backend answered with a non-success status.
    Rejected { status: u16 },
    /// The response body could not be decoded.
    Decode(String),
}

impl ClientError {
    /// True if the backend was reached and said no.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Rejected { .. })
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "network error: {}", msg),
            ClientError::Rejected { status } => {
                write!(f, "backend rejected request with status {}", status)
            }
            ClientError::Decode(msg) => write!(f, "response decode failed: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Rejected {
                status: status.as_u16(),
            }
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

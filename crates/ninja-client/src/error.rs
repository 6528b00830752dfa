//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the CMS backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, DNS, timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Http {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error detail or response body.
        message: String,
    },

    /// The response body was not valid JSON.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failure, if the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

//! Error types for the roster API.

use roster_core::StoreError;
use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while serving a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request failed validation before reaching the store.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A reply body could not be serialized.
    #[error("reply serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ApiError {
    /// Creates an invalid-request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns the HTTP-style status code for this error.
    ///
    /// Absent records map to 404, uniqueness and relation conflicts to
    /// 409, everything the caller got wrong to 400, and internal failures
    /// (an incomplete cascade, a serialization failure) to 500.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::Store(err) => match err {
                StoreError::NotFound { .. } => 404,
                StoreError::AlreadyExists { .. } | StoreError::AlreadyInRelation { .. } => 409,
                StoreError::InvalidReference { .. }
                | StoreError::NotInRelation { .. }
                | StoreError::SelfRelation { .. } => 400,
                StoreError::CascadeIncomplete { .. } => 500,
            },
            Self::Serialize(_) => 500,
        }
    }

    /// Returns true if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Returns true if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Kinds
 *
 * - `BadRequest` - missing fields or a malformed JSON body
 * - `Unauthorized` - bad credentials, missing or invalid bearer token
 * - `NotFound` - unknown user, post, or route
 * - `Conflict` - username already taken
 * - `Internal` - database, hashing, or signing failure
 *
 * Internal errors keep their detail for the logs; clients only see a generic
 * message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Message returned to clients for any internal failure
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use blog_backend::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request payload is missing fields or is not valid JSON
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Credentials or bearer token rejected
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Requested record does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Record would violate a uniqueness rule
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Unexpected failure; `message` is for logs only
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Payload validation error from the shared module
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an internal error and log its detail
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!("Internal error: {}", message);
        Self::Internal { message }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `BadRequest`, `SharedError` - 400
    /// - `Unauthorized` - 401
    /// - `NotFound` - 404
    /// - `Conflict` - 409
    /// - `Internal` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message safe to show to clients
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Conflict { message } => message.clone(),
            Self::Internal { .. } => INTERNAL_MESSAGE.to_string(),
            Self::SharedError(err) => err.to_string(),
        }
    }
}

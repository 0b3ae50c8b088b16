//! Shared Error Types
//!
//! This module defines the validation errors raised while reading request
//! payloads. They carry the offending field so the backend can turn them into
//! a `400 Bad Request` with a useful message.
//!
//! # Usage
//!
//! ```rust
//! use blog_backend::shared::error::{require_field, SharedError};
//!
//! let title = require_field("title", Some("Hello".to_string())).unwrap();
//! assert_eq!(title, "Hello");
//!
//! let err = require_field("title", None).unwrap_err();
//! assert!(matches!(err, SharedError::MissingField { .. }));
//! ```
use thiserror::Error;

/// Shared error types for payload validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field was absent, null, or empty
    #[error("Missing required field '{field}'")]
    MissingField {
        /// The field that was missing
        field: String,
    },
}

impl SharedError {
    /// Create a new missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// Unwrap a required string field.
///
/// Absent, `null` and empty strings are all treated as missing.
pub fn require_field(field: &str, value: Option<String>) -> Result<String, SharedError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SharedError::missing(field)),
    }
}

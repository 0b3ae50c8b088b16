//! Backend Error Module
//!
//! This module defines the error type used by every HTTP handler and its
//! conversion into a JSON response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use blog_backend::backend::error::BackendError;
//!
//! async fn handler() -> Result<String, BackendError> {
//!     Err(BackendError::not_found("Not found"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;

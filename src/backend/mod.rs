//! Backend Module
//!
//! The Axum HTTP server: routing, authentication, blog post storage and
//! error handling.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Configuration, state, startup and shutdown
//! ├── routes/         - Route configuration
//! ├── auth/           - Users, password hashing, tokens, /signup, /signin
//! ├── blog/           - Post storage and /blogs handlers
//! ├── middleware/     - Bearer token check
//! ├── extract.rs      - JSON extractor with JSON error rejections
//! └── error/          - Error type and response conversion
//! ```
//!
//! # State Management
//!
//! `AppState` holds the SQLite pool, the token keys and the password hasher.
//! It is built once at startup and shared with every handler through Axum
//! state; it is never mutated afterwards. Each request runs independently.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; errors become
//! `{"msg": ..., "status": ...}` JSON responses with a matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Blog posts
pub mod blog;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

pub use error::BackendError;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};

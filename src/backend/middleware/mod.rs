//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer token check for the write routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::post, Router};
//! use blog_backend::backend::middleware::require_auth;
//! use blog_backend::backend::server::state::AppState;
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/blogs", post(|| async { "ok" }))
//!         .route_layer(middleware::from_fn_with_state(state, require_auth))
//! }
//! ```

pub mod auth;

pub use auth::{authorize, require_auth, AuthRejection, AuthUser, AuthenticatedUser};

//! Blog Module
//!
//! CRUD over blog posts.
//!
//! - **`db`** - Post persistence (SQLite)
//! - **`handlers`** - HTTP handlers for `/blogs` and `/blogs/{id}`
//!
//! Listing is public; create, update and delete sit behind
//! [`crate::backend::middleware::require_auth`]. Any authenticated user may
//! modify any post.

/// Post persistence
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_post, delete_post, list_posts, update_post};

//! Shared Module
//!
//! Wire types used by the HTTP handlers and by clients of the API:
//!
//! - **`post`** - Post record and create/update payloads
//! - **`error`** - Payload validation errors

pub mod error;

pub mod post;

pub use error::SharedError;
pub use post::{NewPost, NewPostRequest, Post, PostPatch};

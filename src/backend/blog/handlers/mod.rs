//! Blog Post Handlers
//!
//! - **`list_posts`** - GET /blogs
//! - **`create_post`** - POST /blogs (auth)
//! - **`update_post`** - PUT /blogs/{id} (auth)
//! - **`delete_post`** - DELETE /blogs/{id} (auth)

pub mod list;

pub mod create;

pub mod update;

pub mod delete;

pub use create::create_post;
pub use delete::delete_post;
pub use list::list_posts;
pub use update::update_post;

use uuid::Uuid;

/// Parse a post ID from the path; anything that is not a UUID names no post.
pub(crate) fn parse_post_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

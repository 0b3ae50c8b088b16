/**
 * Blog Post Data Structures
 *
 * This module defines the Post record and the payloads used to create and
 * update it. Field names on the wire are camelCase (`createdAt`).
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_field, SharedError};

/// A single blog post
///
/// # Example
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "title": "Hello",
///   "description": "First post",
///   "createdAt": "2024-05-01T10:00:00.123Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID (UUID)
    pub id: Uuid,
    /// Post title
    pub title: String,
    /// Post body
    pub description: String,
    /// Set by the server when the post is created
    pub created_at: DateTime<Utc>,
}

/// Create post request
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a 400 with a message instead of a deserialization rejection.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct NewPostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Validated create post payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub description: String,
}

impl NewPostRequest {
    /// Check that title and description are present and non-empty
    pub fn validate(self) -> Result<NewPost, SharedError> {
        Ok(NewPost {
            title: require_field("title", self.title)?,
            description: require_field("description", self.description)?,
        })
    }
}

/// Partial update of a post
///
/// Every field that is present overwrites the stored value; absent and null
/// fields keep the stored value. Unknown fields are ignored.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl PostPatch {
    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.created_at.is_none()
    }
}

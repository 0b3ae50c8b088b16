//! GET /blogs

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::blog::db;
use crate::backend::error::BackendError;
use crate::shared::Post;

/// List all posts, newest first. No authentication required.
pub async fn list_posts(State(pool): State<SqlitePool>) -> Result<Json<Vec<Post>>, BackendError> {
    let posts = db::list_posts(&pool).await?;
    tracing::debug!("Listing {} posts", posts.len());
    Ok(Json(posts))
}

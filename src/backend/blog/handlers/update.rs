/**
 * Update Post Handler
 *
 * PUT /blogs/{id} (requires authentication)
 *
 * Every known field present in the body (`title`, `description`,
 * `createdAt`) overwrites the stored value. Absent or null fields are kept
 * and unknown fields are ignored. A request without a body is an empty
 * update, so it still answers with the post or 404.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::blog::db;
use crate::backend::blog::handlers::parse_post_id;
use crate::backend::error::BackendError;
use crate::backend::extract::AppJsonOrDefault;
use crate::backend::middleware::AuthUser;
use crate::shared::{Post, PostPatch};

/// Apply a partial update and return the updated post
///
/// # Errors
///
/// * `404 Not Found` - no post with this ID
pub async fn update_post(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    AppJsonOrDefault(patch): AppJsonOrDefault<PostPatch>,
) -> Result<Json<Post>, BackendError> {
    let not_found = || {
        tracing::warn!("Update for unknown post {}", id);
        BackendError::not_found("Not found")
    };

    let post_id = parse_post_id(&id).ok_or_else(not_found)?;
    let post = db::update_post(&pool, post_id, &patch)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!("Post {} updated by user {}", post.id, user.user_id);
    Ok(Json(post))
}

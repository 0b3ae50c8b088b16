//! DELETE /blogs/{id} (requires authentication)
//!
//! Idempotent: the response is the same whether or not the post existed.

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::blog::db;
use crate::backend::blog::handlers::parse_post_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

pub async fn delete_post(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let removed = match parse_post_id(&id) {
        Some(post_id) => db::delete_post(&pool, post_id).await?,
        None => false,
    };

    if removed {
        tracing::info!("Post {} deleted by user {}", id, user.user_id);
    } else {
        tracing::debug!("Delete for absent post {} by user {}", id, user.user_id);
    }

    Ok(Json(MessageResponse::new("Deleted")))
}

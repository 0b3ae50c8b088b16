/**
 * Database Operations for Blog Posts
 *
 * Posts are listed newest first. `created_at` is stored with millisecond
 * precision and ties are broken by insertion order (`rowid`), so two posts
 * created within the same millisecond still list in reverse creation order.
 */

use chrono::{SubsecRound, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{NewPost, Post, PostPatch};

/// All posts, newest first
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, description, created_at
        FROM posts
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Insert a post with a server-assigned ID and creation time
pub async fn create_post(pool: &SqlitePool, post: &NewPost) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now().trunc_subsecs(3);

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, description, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, title, description, created_at
        "#,
    )
    .bind(id)
    .bind(&post.title)
    .bind(&post.description)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get post by ID
pub async fn get_post(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, description, created_at
        FROM posts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Overwrite the fields present in `patch`
///
/// Returns the updated post, or `None` if no post has this ID.
pub async fn update_post(
    pool: &SqlitePool,
    id: Uuid,
    patch: &PostPatch,
) -> Result<Option<Post>, sqlx::Error> {
    if patch.is_empty() {
        return get_post(pool, id).await;
    }

    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = COALESCE(?, title),
            description = COALESCE(?, description),
            created_at = COALESCE(?, created_at)
        WHERE id = ?
        RETURNING id, title, description, created_at
        "#,
    )
    .bind(patch.title.as_deref())
    .bind(patch.description.as_deref())
    .bind(patch.created_at.map(|at| at.trunc_subsecs(3)))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete post by ID, returning whether a row was removed
pub async fn delete_post(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

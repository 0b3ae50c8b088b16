//! Test fixtures for unit tests: an in-memory database with the schema
//! applied and an `AppState` wired to it.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::backend::auth::password::CredentialHasher;
use crate::backend::auth::sessions::{TokenKeys, DEFAULT_TOKEN_TTL_SECS};
use crate::backend::server::config::{run_migrations, MIN_BCRYPT_COST};
use crate::backend::server::state::AppState;

pub const TEST_SECRET: &[u8] = b"unit-test-secret";

/// In-memory SQLite pool with migrations applied.
///
/// A single connection that never expires, so every query sees the same
/// in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Number of users stored under `username`
pub async fn count_users_named(pool: &SqlitePool, username: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

/// Number of stored posts
pub async fn count_posts(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
        .expect("Failed to count posts")
}

pub async fn test_state() -> AppState {
    AppState::new(
        test_pool().await,
        TokenKeys::new(TEST_SECRET, DEFAULT_TOKEN_TTL_SECS),
        CredentialHasher::new(MIN_BCRYPT_COST),
    )
}

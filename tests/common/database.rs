//! Database test fixtures and utilities
//!
//! Every test gets its own in-memory SQLite database with the migrations
//! applied, so tests are isolated without any cleanup step.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use blog_backend::backend::server::config::run_migrations;

/// Create an empty in-memory database pool.
///
/// One connection that never expires; a second connection to
/// `sqlite::memory:` would see a different database.
pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new migrated test database
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of users stored under `username`
    pub async fn count_users_named(&self, username: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count users")
    }

    /// Number of stored posts
    pub async fn count_posts(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count posts")
    }
}

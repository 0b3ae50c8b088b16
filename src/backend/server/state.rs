/**
 * Application State Management
 *
 * `AppState` is built once at startup and cloned into every handler. It holds
 * the SQLite pool, the token keys and the password hasher; nothing in it is
 * mutated after construction.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers and middleware ask for just the
 * part they need (`State<SqlitePool>`, `State<Arc<TokenKeys>>`, ...).
 *
 * # Example
 *
 * ```rust,no_run
 * use blog_backend::backend::server::state::AppState;
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     let _ = pool;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::CredentialHasher;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::server::config::ServerConfig;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Token signing and verification keys
    pub tokens: Arc<TokenKeys>,

    /// Password hasher
    pub hasher: CredentialHasher,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, tokens: TokenKeys, hasher: CredentialHasher) -> Self {
        Self {
            db_pool,
            tokens: Arc::new(tokens),
            hasher,
        }
    }

    /// Build state from a loaded configuration and an open pool
    pub fn from_config(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        Self::new(
            db_pool,
            TokenKeys::new(config.jwt_secret.as_bytes(), config.token_ttl_secs),
            CredentialHasher::new(config.bcrypt_cost),
        )
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for CredentialHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}

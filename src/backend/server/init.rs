/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and apply migrations
 * 2. Build `AppState` (pool, token keys, hasher)
 * 3. Create the router
 * 4. Serve until Ctrl-C / SIGTERM, then close the pool
 *
 * The pool is created exactly once here and handed to handlers through
 * router state; nothing else opens database connections.
 */

use std::net::SocketAddr;

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, run_migrations, ServerConfig};
use crate::backend::server::state::AppState;

/// Errors that stop the server from starting or running
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create and configure the Axum application
///
/// Returns the router together with the state it was built from, so the
/// caller can close the pool on shutdown.
pub async fn create_app(config: &ServerConfig) -> Result<(Router<()>, AppState), ServerError> {
    tracing::info!("Initializing blog backend server");

    let db_pool = connect_database(config).await?;
    run_migrations(&db_pool).await?;

    let app_state = AppState::from_config(db_pool, config);
    let app = create_router(app_state.clone());

    tracing::info!("Router configured");
    Ok((app, app_state))
}

/// Run the server until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let (app, app_state) = create_app(&config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down, closing database pool");
    app_state.db_pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

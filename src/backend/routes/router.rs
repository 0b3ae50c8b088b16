/**
 * Router Configuration
 *
 * Combines the route groups into one Axum router and adds the shared
 * layers: request tracing and permissive CORS. Unknown paths get a JSON 404.
 */

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::blog_routes::configure_blog_routes;
use crate::backend::server::state::AppState;

async fn fallback() -> BackendError {
    BackendError::not_found("Route not found")
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();
    let router = configure_auth_routes(router);
    let router = configure_blog_routes(router, &app_state);

    router
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

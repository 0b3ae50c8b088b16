/**
 * Authentication Routes
 *
 * - `GET /` - plain-text status line
 * - `POST /signup` - User registration
 * - `POST /signin` - Exchange credentials for a bearer token
 *
 * All of these are public.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{signin, signup};
use crate::backend::server::state::AppState;

/// Status line served at `/`
pub const STATUS_TEXT: &str = "Blog backend server running";

async fn status() -> &'static str {
    STATUS_TEXT
}

/// Configure the public status and authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(status))
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

/**
 * Blog Routes
 *
 * - `GET /blogs` - list posts (public)
 * - `POST /blogs` - create a post (auth)
 * - `PUT /blogs/{id}` - update a post (auth)
 * - `DELETE /blogs/{id}` - delete a post (auth)
 *
 * The write routes are collected in their own router and wrapped with
 * `require_auth` via `route_layer`, so the token check runs only for them.
 * Merging it with the public router combines the two `/blogs` method sets.
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::blog::{create_post, delete_post, list_posts, update_post};
use crate::backend::middleware::require_auth;
use crate::backend::server::state::AppState;

/// Configure blog post routes
pub fn configure_blog_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/blogs", post(create_post))
        .route("/blogs/{id}", put(update_post).delete(delete_post))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), require_auth));

    router.route("/blogs", get(list_posts)).merge(protected)
}

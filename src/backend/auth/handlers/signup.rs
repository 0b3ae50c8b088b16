/**
 * Signup Handler
 *
 * POST /signup
 *
 * # Registration Process
 *
 * 1. Require a non-empty username and password
 * 2. Reject usernames that already exist
 * 3. Hash password using bcrypt
 * 4. Create user in database
 *
 * The UNIQUE index on `users.username` backs the existence check, so two
 * concurrent signups for the same name still produce exactly one user.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{Credentials, MessageResponse, SignupRequest};
use crate::backend::auth::users::{create_user, get_user_by_username, is_duplicate_username};
use crate::backend::error::BackendError;
use crate::backend::extract::AppJson;
use crate::backend::server::state::AppState;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - username or password missing
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "securepassword123"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"msg": "Signup done"}
/// ```
pub async fn signup(
    State(state): State<AppState>,
    AppJson(request): AppJson<SignupRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let Credentials { username, password } = Credentials::try_from(request).map_err(|e| {
        tracing::warn!("Signup rejected: {}", e);
        BackendError::from(e)
    })?;

    tracing::info!("Signup request for username: {}", username);

    if get_user_by_username(&state.db_pool, &username).await?.is_some() {
        tracing::warn!("Username already exists: {}", username);
        return Err(BackendError::conflict("User already exists"));
    }

    let password_hash = state.hasher.hash(password).await?;

    let user = create_user(&state.db_pool, &username, &password_hash)
        .await
        .map_err(|e| {
            if is_duplicate_username(&e) {
                tracing::warn!("Username taken concurrently: {}", username);
                BackendError::conflict("User already exists")
            } else {
                BackendError::from(e)
            }
        })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok(Json(MessageResponse::new("Signup done")))
}

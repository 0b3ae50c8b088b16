/**
 * Signin Handler
 *
 * POST /signin
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a signed token carrying the user ID
 *
 * Passwords and tokens are never logged.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{Credentials, SigninRequest, TokenResponse};
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;
use crate::backend::extract::AppJson;
use crate::backend::server::state::AppState;

/// Sign in handler
///
/// # Errors
///
/// * `400 Bad Request` - username or password missing
/// * `404 Not Found` - no user with this username
/// * `401 Unauthorized` - password does not match
/// * `500 Internal Server Error` - database, hashing, or signing failure
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}
/// ```
pub async fn signin(
    State(state): State<AppState>,
    AppJson(request): AppJson<SigninRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Credentials { username, password } = Credentials::try_from(request).map_err(|e| {
        tracing::warn!("Signin rejected: {}", e);
        BackendError::from(e)
    })?;

    tracing::info!("Signin request for: {}", username);

    let user = get_user_by_username(&state.db_pool, &username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", username);
            BackendError::not_found("User not found")
        })?;

    let valid = state
        .hasher
        .verify(password, user.password_hash.clone())
        .await?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", username);
        return Err(BackendError::unauthorized("Wrong password"));
    }

    let token = state
        .tokens
        .create_token(user.id)
        .map_err(|e| BackendError::internal(format!("Failed to create token: {e}")))?;

    tracing::info!("User signed in successfully: {} ({})", user.username, user.id);

    Ok(Json(TokenResponse { token }))
}

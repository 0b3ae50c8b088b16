/**
 * Authentication Middleware
 *
 * This module guards the write routes. `authorize` is the check itself: it
 * reads the `Authorization: Bearer <token>` header, verifies the token and
 * returns either the caller or the reason for rejecting them. `require_auth`
 * wraps it as an axum middleware, and routes opt in with `route_layer`.
 *
 * On success the caller is stored in the request extensions, where handlers
 * pick it up with the `AuthUser` extractor.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from the bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Why a request failed the auth check
#[derive(Debug, Error)]
pub enum AuthRejection {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Authorization header must be 'Bearer <token>'")]
    MalformedHeader,

    #[error("Invalid or expired token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("Token does not carry a valid user id")]
    InvalidSubject,
}

impl From<AuthRejection> for BackendError {
    fn from(rejection: AuthRejection) -> Self {
        BackendError::unauthorized(rejection.to_string())
    }
}

/// Check the bearer token on a request
pub fn authorize(headers: &HeaderMap, tokens: &TokenKeys) -> Result<AuthenticatedUser, AuthRejection> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthRejection::MissingHeader)?
        .to_str()
        .map_err(|_| AuthRejection::MalformedHeader)?;

    // The scheme name is case-insensitive (RFC 7235)
    let token = auth_header
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .ok_or(AuthRejection::MalformedHeader)?;

    let claims = tokens
        .verify_token(token)
        .map_err(AuthRejection::InvalidToken)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthRejection::InvalidSubject)?;

    Ok(AuthenticatedUser { user_id })
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the token is missing or invalid; otherwise
/// attaches `AuthenticatedUser` to the request and continues.
pub async fn require_auth(
    State(tokens): State<Arc<TokenKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authorize(request.headers(), &tokens).map_err(|rejection| {
        tracing::warn!(
            "Rejected {} {}: {}",
            request.method(),
            request.uri().path(),
            rejection
        );
        BackendError::from(rejection)
    })?;

    tracing::debug!("Authenticated user {}", user.user_id);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the user attached by `require_auth`
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("Missing Authorization header")
            })?;

        Ok(AuthUser(user))
    }
}

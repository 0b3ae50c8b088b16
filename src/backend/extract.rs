/**
 * Request Extractors
 *
 * `AppJson` behaves like `axum::Json` but rejects with `BackendError`, so a
 * malformed body produces the same `{"msg", "status"}` shape as every other
 * error instead of axum's plain-text rejection.
 *
 * `AppJsonOrDefault` is for bodies where every field is optional: an absent
 * or blank body reads as `T::default()` and is not checked for a JSON
 * content type.
 */

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// JSON body extractor with `BackendError` rejections
#[derive(FromRequest, Debug)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct AppJson<T>(pub T);

/// JSON body extractor where an empty body means `T::default()`
#[derive(Debug)]
pub struct AppJsonOrDefault<T>(pub T);

impl<T, S> FromRequest<S> for AppJsonOrDefault<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(|rejection| BackendError::bad_request(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!("Rejected request body: {}", e);
            BackendError::bad_request(format!("Failed to parse the request body as JSON: {e}"))
        })?;

        Ok(Self(value))
    }
}

/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses and lifts the
 * errors of the libraries we call (sqlx, axum's JSON extractor) into
 * `BackendError`.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "msg": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "msg": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        BackendError::internal(format!("Database error: {err}"))
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::bad_request(rejection.body_text())
    }
}

/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `ApiError`, allowing
 * handlers to return errors directly with the `?` operator.
 *
 * # Response Format
 *
 * Error responses are JSON objects with a single field:
 * ```json
 * {
 *   "detail": "Product not found"
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// Server-side faults are logged at error level with their full
    /// detail before the (generic) response is produced; client errors
    /// are logged at warn level.
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Storage(err) => {
                tracing::error!("Storage failure: {:?}", err);
            }
            ApiError::Internal { message } => {
                tracing::error!("Internal fault: {}", message);
            }
            other => {
                tracing::warn!("Request failed ({}): {}", status, other);
            }
        }

        let body = serde_json::json!({
            "detail": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}

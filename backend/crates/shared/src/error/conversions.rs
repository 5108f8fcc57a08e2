//! Error conversions - rendering [`AppError`] as an HTTP response
//!
//! Every error is rendered as `{"error": "<code>"}`. Rate-limit errors
//! additionally carry `retry_after_ms` and a `Retry-After` header.

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
use super::app_error::AppError;

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::{HeaderValue, StatusCode, header};

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut body = serde_json::json!({ "error": self.code() });

        let Some(retry_after) = self.retry_after() else {
            return (status, Json(body)).into_response();
        };

        let retry_after_ms = retry_after.as_millis() as u64;
        body["retry_after_ms"] = serde_json::Value::from(retry_after_ms);

        let mut response = (status, Json(body)).into_response();
        // Retry-After is expressed in whole seconds, rounded up
        let retry_after_secs = retry_after_ms.div_ceil(1000);
        response
            .headers_mut()
            .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
        response
    }
}

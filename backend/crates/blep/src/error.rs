//! Blep Error Types
//!
//! This module provides blep-specific error variants that integrate
//! with the unified `kernel::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::{AppError, ErrorKind};
use std::time::Duration;
use thiserror::Error;

/// Blep-specific result type alias
pub type BlepResult<T> = Result<T, BlepError>;

/// Blep-specific error variants
#[derive(Debug, Error)]
pub enum BlepError {
    /// `country_code` or `country_name` absent or blank
    #[error("country_code and country_name are required")]
    MissingCountry,

    /// Too many requests from one client in the current window
    #[error("Rate limit exceeded")]
    RateLimited { retry_after: Duration },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Operation the configured store does not implement
    #[error("Unsupported store operation: {0}")]
    UnsupportedOperation(&'static str),
}

impl BlepError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlepError::MissingCountry => StatusCode::BAD_REQUEST,
            BlepError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            BlepError::Database(_) | BlepError::UnsupportedOperation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlepError::MissingCountry => ErrorKind::BadRequest,
            BlepError::RateLimited { .. } => ErrorKind::TooManyRequests,
            BlepError::Database(_) | BlepError::UnsupportedOperation(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlepError::Database(e) => {
                tracing::error!(error = %e, "Blep database error");
            }
            BlepError::UnsupportedOperation(op) => {
                tracing::error!(operation = %op, "Store does not support operation");
            }
            // The limiter already warned with the client key
            BlepError::RateLimited { retry_after } => {
                tracing::debug!(
                    retry_after_ms = retry_after.as_millis() as u64,
                    "Blep rate limited"
                );
            }
            BlepError::MissingCountry => {
                tracing::debug!(error = %self, "Blep rejected");
            }
        }
    }
}

impl From<BlepError> for AppError {
    fn from(err: BlepError) -> Self {
        let message = err.to_string();
        match err {
            BlepError::MissingCountry => AppError::bad_request(message).with_code("missing_country"),
            BlepError::RateLimited { retry_after } => AppError::too_many_requests(retry_after),
            BlepError::Database(e) => AppError::internal(message).with_source(e),
            BlepError::UnsupportedOperation(_) => AppError::internal(message),
        }
    }
}

impl IntoResponse for BlepError {
    fn into_response(self) -> Response {
        self.log();
        // Server-side detail stays in the logs; the body only carries the code
        AppError::from(self).into_response()
    }
}

//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Storefront                             │
//! │                                                                         │
//! │  Handler                                                                │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Database Error? ─── DbError::QueryFailed("...") ──► ApiError (500)    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  PATCH on unknown id? ────────────────────────────► ApiError (404)     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──────────────────────────────────────────► 200 / 201         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Response Body
//! ```json
//! { "code": "DATABASE_ERROR", "message": "Database operation failed" }
//! ```
//! Store details are logged, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use storefront_db::DbError;

/// API error returned from handlers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Database operation failed (500)
    DatabaseError,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }
}

/// Converts database errors to API errors.
///
/// Every store fault is a 500; the detail goes to the log only.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        tracing::error!(error = %err, "Database operation failed");

        let message = match err {
            DbError::ConnectionFailed(_) => "Database connection failed",
            DbError::PoolExhausted => "Database pool exhausted",
            _ => "Database operation failed",
        };
        ApiError::new(ErrorCode::DatabaseError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_faults_are_500() {
        let err: ApiError = DbError::PoolExhausted.into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.code.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Database pool exhausted");

        let err: ApiError = DbError::ConnectionFailed("Pool is closed".into()).into();
        assert_eq!(err.message, "Database connection failed");
    }

    #[test]
    fn test_query_failure_hides_details() {
        let err: ApiError = DbError::QueryFailed("no such table: vendors".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Category", "x")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Category not found: x");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::not_found("Category", "x").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_store_fault_detail_is_logged() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let err: ApiError = tracing::subscriber::with_default(subscriber, || {
            DbError::ConnectionFailed("unable to open database file".into()).into()
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("unable to open database file"));
        assert!(!err.message.contains("unable to open"));
    }
}

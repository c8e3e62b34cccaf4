//! Application-wide error handling.
//!
//! A single error type for the whole backend, built on `thiserror` and
//! integrated with Actix-Web through `ResponseError` so every handler can
//! return `Result<HttpResponse, AppError>` and rely on automatic conversion
//! into a JSON error response with the right status code.
//!
//! ## HTTP mapping
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `DatabaseError` | 500 Internal Server Error |
//! | `InternalError` | 500 Internal Server Error |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_employee(store: &RecordStore<Employee>, id: &str) -> AppResult<Employee> {
//!     store
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("employee {id} not found")))
//! }
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// Covers every failure the record service can surface to a client.
/// Converted automatically into an HTTP response via
/// [`actix_web::ResponseError`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Database connection or query failure (500 Internal Server Error).
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Input validation failure, carries the offending field names
    /// (400 Bad Request).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// No document matched the requested identifier or filter
    /// (404 Not Found).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected failure that does not fit the other variants
    /// (500 Internal Server Error).
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// Converts the error into a standard JSON response.
    ///
    /// All error responses share the shape `{ "error": "<message>" }`.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// Convenience alias used throughout the crate.
pub type AppResult<T> = Result<T, AppError>;

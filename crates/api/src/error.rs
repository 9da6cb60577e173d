use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use streetcode_core::error::CoreError;
use streetcode_core::validation::FieldViolation;
use streetcode_services::blob::BlobError;
use streetcode_services::error::ServiceError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `streetcode_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A blob storage failure.
    #[error(transparent)]
    Blob(#[from] BlobError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(core) => Self::Core(core),
            ServiceError::Database(db) => Self::Database(db),
            ServiceError::Blob(blob) => Self::Blob(blob),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details: Option<&[FieldViolation]> = None;

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidFields(violations) => {
                    details = Some(violations.as_slice());
                    (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        core.to_string(),
                    )
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
                CoreError::Persistence(msg) => {
                    (StatusCode::BAD_REQUEST, "PERSISTENCE_FAILED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Blob errors ---
            AppError::Blob(err) => classify_blob_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = match details {
            Some(violations) => json!({
                "error": message,
                "code": code,
                "details": violations,
            }),
            None => json!({
                "error": message,
                "code": code,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::Database(db_err) = err {
        // PostgreSQL unique constraint violation: error code 23505
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
    }
    tracing::error!(error = %err, "Database error");
    internal()
}

/// Classify a blob storage error.
///
/// - A payload that is not valid base64 is the client's fault: 400.
/// - A missing blob maps to 404.
/// - I/O, naming and crypto failures map to 500 with a sanitized message.
fn classify_blob_error(err: &BlobError) -> (StatusCode, &'static str, String) {
    match err {
        BlobError::Decode(e) => (
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
            format!("Invalid base64 payload: {e}"),
        ),
        BlobError::NotFound(name) => {
            tracing::warn!(blob = %name, "Referenced blob is missing");
            (StatusCode::NOT_FOUND, "NOT_FOUND", "File not found".to_string())
        }
        other => {
            tracing::error!(error = %other, "Blob storage error");
            internal()
        }
    }
}

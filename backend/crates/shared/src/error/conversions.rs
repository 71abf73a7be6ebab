//! Error conversions - From implementations for common error types
//!
//! Database failures classified into [`AppError`], and the conversion from
//! [`AppError`] into the response envelope.

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Kind and public message for a database failure.
///
/// Shared with the per-crate error enums, which keep the `sqlx::Error` as
/// their source and only need the classification.
#[cfg(feature = "sqlx")]
pub fn classify_sqlx(err: &sqlx::Error) -> (ErrorKind, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
        sqlx::Error::PoolTimedOut => (
            ErrorKind::ServiceUnavailable,
            "Database connection pool exhausted",
        ),
        // https://www.postgresql.org/docs/current/errcodes-appendix.html
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23502") => (ErrorKind::BadRequest, "Required field is null"),
            Some("23503") => (ErrorKind::Conflict, "Referenced record does not exist"),
            Some("23505") => (ErrorKind::Conflict, "Duplicate key value"),
            Some("23514") => (ErrorKind::BadRequest, "Check constraint violation"),
            Some("22001") => (ErrorKind::BadRequest, "Value too long"),
            Some("57P01" | "57P02" | "57P03") => {
                (ErrorKind::ServiceUnavailable, "Database unavailable")
            }
            _ => (ErrorKind::InternalServerError, "Database error"),
        },
        sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = classify_sqlx(&err);
        AppError::new(kind, message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        use crate::response::ApiResponse;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ApiResponse::failure(self.public_message().to_owned());
        (status, Json(body)).into_response()
    }
}

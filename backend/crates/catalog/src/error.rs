//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::classify_sqlx;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::media::MediaError;
use platform::upload::UploadError;
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Carries the resource's own message, e.g. "Category not found"
    #[error("{0}")]
    NotFound(&'static str),

    /// A required upload part was absent or empty
    #[error("{0} is required")]
    MissingFile(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Upload(#[from] UploadError),

    #[error("Media storage error: {0}")]
    Media(#[from] MediaError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::MissingFile(_) | CatalogError::Validation(_) => ErrorKind::BadRequest,
            CatalogError::Upload(e) if e.is_too_large() => ErrorKind::PayloadTooLarge,
            CatalogError::Upload(_) => ErrorKind::BadRequest,
            CatalogError::Database(e) => classify_sqlx(e).0,
            CatalogError::Media(_) | CatalogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            CatalogError::Database(e) => {
                let (kind, message) = classify_sqlx(e);
                AppError::new(kind, message)
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Media(e) => {
                tracing::error!(error = %e, "Catalog media error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::Upload(e) => {
                tracing::warn!(error = %e, "Rejected upload");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Value objects validate into `AppError`; keep their 400s as 400s
impl From<AppError> for CatalogError {
    fn from(err: AppError) -> Self {
        if err.kind() == ErrorKind::BadRequest {
            CatalogError::Validation(err.message().to_owned())
        } else {
            CatalogError::Internal(err.to_string())
        }
    }
}

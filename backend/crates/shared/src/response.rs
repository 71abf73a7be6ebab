//! Response Envelope
//!
//! Every endpoint answers with the same JSON shape:
//!
//! ```json
//! { "status": true, "message": "optional text", "params": { } }
//! ```
//!
//! `status` is `false` for every error response (see
//! [`crate::error::conversions`]); `message` and `params` are omitted when
//! absent.

use std::borrow::Cow;

use serde::Serialize;

/// JSON envelope `{status, message?, params?}`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `params`
    pub fn ok(params: T) -> Self {
        Self {
            status: true,
            message: None,
            params: Some(params),
        }
    }

    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// Successful response with only a message (e.g. `Deleted 42`)
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: true,
            message: Some(message.into()),
            params: None,
        }
    }

    /// Failed response; built by the error conversions
    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: false,
            message: Some(message.into()),
            params: None,
        }
    }
}

/// 201 Created wrapper around an envelope
#[derive(Debug, Clone)]
pub struct Created<T>(pub ApiResponse<T>);

#[cfg(feature = "axum")]
mod into_response {
    use axum::Json;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use serde::Serialize;

    use super::{ApiResponse, Created};

    impl<T: Serialize> IntoResponse for ApiResponse<T> {
        fn into_response(self) -> Response {
            (StatusCode::OK, Json(self)).into_response()
        }
    }

    impl<T: Serialize> IntoResponse for Created<T> {
        fn into_response(self) -> Response {
            (StatusCode::CREATED, Json(self.0)).into_response()
        }
    }
}

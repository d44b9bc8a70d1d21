use crate::{NoteError, NoteValidationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde::Serialize;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// JSON error envelope: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// An HTTP status paired with the client-facing error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    #[must_use]
    pub const fn invalid_id() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid ID")
    }

    #[must_use]
    pub const fn empty_body() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "body cannot be empty")
    }

    /// Body was not a JSON object of the expected shape
    #[must_use]
    pub const fn malformed_body() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "missing fields")
    }

    #[must_use]
    pub const fn missing_field() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "missing field")
    }

    #[must_use]
    pub const fn note_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "note not found")
    }

    #[must_use]
    pub const fn route_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "route not found")
    }

    #[must_use]
    pub const fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::Validation(NoteValidationError::DescriptionEmpty) => Self::missing_field(),
            NoteError::Validation(NoteValidationError::NoteNotFound(_)) => Self::note_not_found(),
            NoteError::Backend(e) => {
                // Storage details stay in the log, the client only sees a 500
                error!("Storage failure: {e}");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

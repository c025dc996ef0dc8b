//! API error type — maps library errors onto HTTP statuses and JSON bodies.
//!
//! Every error body has the shape `{"error": "<message>"}`. Unknown field
//! names are a validation failure (422); a page starting past the last result
//! is a plain client error (400).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rolo_core::{SearchError, UnknownFieldError};
use serde_json::json;

/// Anything a handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Search(SearchError::PageOutOfRange { .. }) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::metrics::{REQUEST_FAILURES, REQUEST_REJECTED};

// Everything the summarize endpoint can answer besides a summary.
// Backend failure detail is logged at the call site and never leaked here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input. Notes must be a string.")]
    InvalidNotes,

    #[error("{reason}")]
    Rejected {
        reason: &'static str,
        status: StatusCode,
    },

    #[error("Invalid content detected. Please ensure your input contains only meeting notes.")]
    SpamContent,

    #[error("Failed to summarize text")]
    Summarization,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidNotes | ApiError::SpamContent => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Summarization => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            REQUEST_FAILURES.inc();
        } else {
            REQUEST_REJECTED.inc();
        }

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

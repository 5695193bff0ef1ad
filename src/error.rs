// Request outcomes and their HTTP mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::StatusResponse;

#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    /// Request body could not be buffered (e.g. over the size limit).
    #[error("Failed to read body")]
    BodyRead,
    /// Body is not JSON, or not the notification shape.
    #[error("Invalid JSON payload")]
    InvalidPayload,
    /// Both title and text were empty after trimming.
    #[error("Missing title/text")]
    MissingContent,
    /// A control command (suspend) failed; the text is returned to the caller.
    #[error("{0}")]
    ActionFailed(String),
    /// Anything not classified above. Answered with a bare 500.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl DaemonError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DaemonError::BodyRead
            | DaemonError::InvalidPayload
            | DaemonError::MissingContent => StatusCode::BAD_REQUEST,
            DaemonError::ActionFailed(_) | DaemonError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DaemonError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            DaemonError::Internal(e) => {
                tracing::error!(error = %e, "Unhandled error while serving request");
                status.into_response()
            }
            other => (status, Json(StatusResponse::error(other.to_string()))).into_response(),
        }
    }
}

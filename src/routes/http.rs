// Handlers: stats, sleep, phone-notification, not-found

use axum::{
    Json,
    extract::{Request, State, rejection::BytesRejection},
    http::StatusCode,
};
use bytes::Bytes;

use super::AppState;
use super::logging::client_addr;
use crate::error::DaemonError;
use crate::models::{StatsSnapshot, StatusResponse};

/// GET /stats. Fresh snapshot; bare 500 if the CPU or memory read fails.
pub(super) async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsSnapshot>, DaemonError> {
    let snapshot = state.assembler.get_stats().await?;
    tracing::debug!(?snapshot, "Served stats");
    Ok(Json(snapshot))
}

/// POST /sleep
pub(super) async fn sleep_handler(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, DaemonError> {
    state.controls.suspend().await?;
    Ok(Json(StatusResponse::success_with("Suspending system")))
}

/// POST /phone-notification. The body is read whole; empty means `{}`.
pub(super) async fn phone_notification_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<StatusResponse>, DaemonError> {
    let body = body.map_err(|e| {
        tracing::warn!(error = %e, "Failed to read notification body");
        DaemonError::BodyRead
    })?;
    state.controls.notify(&body).await?;
    Ok(Json(StatusResponse::success()))
}

/// Unknown path, or known path with the wrong method. Empty body.
pub(super) async fn not_found(req: Request) -> StatusCode {
    tracing::warn!(
        method = %req.method(),
        path = %req.uri().path(),
        client = %client_addr(&req),
        "Path not found"
    );
    StatusCode::NOT_FOUND
}

// HTTP dispatcher: GET /stats, POST /sleep, POST /phone-notification, 404 for the rest

mod http;
mod logging;

use axum::http::{HeaderValue, header};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::command::CommandRunner;
use crate::config::AppConfig;
use crate::control::Controls;
use crate::metrics::{MetricsProvider, StatsAssembler};

#[derive(Clone)]
pub struct AppState {
    pub(crate) assembler: Arc<StatsAssembler>,
    pub(crate) controls: Arc<Controls>,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn MetricsProvider>,
        runner: Arc<dyn CommandRunner>,
        config: &AppConfig,
    ) -> Self {
        Self {
            assembler: Arc::new(StatsAssembler::new(
                provider,
                runner.clone(),
                config.commands.power_tool.clone(),
            )),
            controls: Arc::new(Controls::new(runner, &config.commands)),
        }
    }
}

/// Known paths answer 404 (not 405) to the wrong method, OPTIONS included, like unknown paths.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/stats", get(http::stats_handler).fallback(http::not_found)) // GET /stats
        .route("/sleep", post(http::sleep_handler).fallback(http::not_found)) // POST /sleep
        .route(
            "/phone-notification",
            post(http::phone_notification_handler).fallback(http::not_found),
        ) // POST /phone-notification
        .fallback(http::not_found)
        // Plain allow-origin header; OPTIONS is not answered as a preflight
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(middleware::from_fn(logging::log_request))
        .with_state(state)
}

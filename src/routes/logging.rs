// Per-request access log

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

/// Peer address when the server was started with connect info.
pub(super) fn client_addr(req: &Request) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".into())
}

pub(super) async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let client = client_addr(&req);
    let response = next.run(req).await;
    tracing::info!(
        %method,
        %path,
        %client,
        status = response.status().as_u16(),
        "Request handled"
    );
    response
}

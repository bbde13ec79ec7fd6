use std::net::SocketAddr;
use std::time::Instant;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::header::{REFERER, USER_AGENT};
use axum::http::{HeaderName, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Access log: one event per request, level chosen by response status.
pub async fn access_log(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    let user_agent = header_or_dash(&req, USER_AGENT);
    let referrer = header_or_dash(&req, REFERER);
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis();

    match status {
        500.. => error!(method, path, status, duration_ms, remote_addr, user_agent, referrer, "request"),
        400..=499 => warn!(method, path, status, duration_ms, remote_addr, user_agent, referrer, "request"),
        _ => info!(method, path, status, duration_ms, remote_addr, user_agent, referrer, "request"),
    }

    response
}

fn header_or_dash(req: &Request<Body>, name: HeaderName) -> String {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}

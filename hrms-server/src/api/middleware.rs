//! 请求日志中间件
//!
//! 记录所有进入的 HTTP 请求的方法、路径、状态码和延迟

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// HTTP 请求日志中间件
pub async fn log_request(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();

    // 根据状态码使用不同级别记录日志
    if status.is_server_error() || status.is_client_error() {
        warn!(
            target: "http_access",
            method = %method,
            uri = %uri,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "{} {} {}", method, uri, status
        );
    } else {
        info!(
            target: "http_access",
            method = %method,
            uri = %uri,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "{} {} {}", method, uri, status
        );
    }

    response
}

//! HTTP 访问日志与传输层错误信封
//!
//! - [`logging_middleware`]: 每个请求一条访问日志
//! - [`timeout_envelope`]: 把 `TimeoutLayer` 的空 408 换成 JSON 信封

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::AppError;
use tracing::Level;

use crate::auth::cookie;
use crate::services::paytr;

/// Header carrying the request id (set by `SetRequestIdLayer`)
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 访问日志
///
/// 字段: request_id, method, route (路由模板，如 `/api/v2/pizza/orders/{id}`),
/// client_ip (`X-Forwarded-For` 优先), session (是否携带 `auth-token`),
/// status, latency_ms。5xx 记 error，4xx 记 warn，其余 info。
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let method = req.method().clone();
    let route = match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };
    let client_ip = paytr::resolve_user_ip(None, req.headers());
    let session = cookie::token_from_headers(req.headers()).is_some();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    macro_rules! access_log {
        ($level:expr) => {
            tracing::event!(
                $level,
                %request_id,
                %method,
                %route,
                %client_ip,
                session,
                status,
                latency_ms,
                "{method} {route} -> {status}"
            )
        };
    }

    match status {
        500.. => access_log!(Level::ERROR),
        400..=499 => access_log!(Level::WARN),
        _ => access_log!(Level::INFO),
    }

    response
}

/// Replace the bodiless 408 produced by the timeout layer with an error envelope
pub async fn timeout_envelope(response: Response) -> Response {
    let bodiless = !response.headers().contains_key(header::CONTENT_TYPE);
    if response.status() == StatusCode::REQUEST_TIMEOUT && bodiless {
        return AppError::request_timeout().into_response();
    }
    response
}

//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`echo`] - `/api/test` 连通性测试
//! - [`paytr`] - PayTR 令牌
//! - [`auth`] - 登录 / 注销 / 当前用户
//! - [`menu`] - 菜单管理
//! - [`orders`] - 订单管理
//! - [`users`] - 用户管理
//! - [`backend_status`] - 后端可用性
//!
//! 除 health / echo / paytr / backend-status 的扁平响应外，所有响应都是
//! [`shared::ApiResponse`] 信封。

pub mod extract;
pub mod middleware;

pub mod auth;
pub mod backend_status;
pub mod echo;
pub mod health;
pub mod menu;
pub mod orders;
pub mod paytr;
pub mod users;

use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, StatusCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use shared::AppError;

/// UUID v4 request id generator
#[derive(Clone, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(echo::router())
        .merge(paytr::router())
        .merge(auth::router())
        .merge(menu::router())
        .merge(orders::router())
        .merge(users::router())
        .merge(backend_status::router())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

/// Build the fully configured application with middleware and state
///
/// Used by the HTTP server and by in-process (oneshot) callers alike.
pub fn build_app(state: ServerState) -> Router {
    let request_id = HeaderName::from_static(middleware::REQUEST_ID_HEADER);
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_router()
        .with_state(state)
        // Request logging - sees the request id set below
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(axum_middleware::map_response(middleware::timeout_envelope))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, XRequestId))
}

async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

async fn not_found(uri: http::Uri) -> AppError {
    AppError::not_found(format!("Endpoint bulunamadı: {}", uri.path()))
}

/// ISO 8601 UTC timestamp with milliseconds
pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

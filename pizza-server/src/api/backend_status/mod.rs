//! 后端可用性路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/backend-status | GET | 整体后端 (数据库) 状态 |
//! | /api/backend-status/{apiName} | GET | 指定 API 状态 |
//!
//! 已知 API: `menu`, `orders`, `users`, `auth`, `paytr`。
//! 未知名称同样返回 200，`available: false`。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::KNOWN_APIS;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/backend-status", get(handler::backend))
        .route("/api/backend-status/{api_name}", get(handler::api))
}

//! PayTR 支付路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/paytr/create-token | POST | 生成 iFrame 令牌 |
//!
//! 其他方法返回 405 `{success:false, error:"Method not allowed"}`。

mod handler;

use axum::{Router, routing::any};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/paytr/create-token", any(handler::create_token))
}

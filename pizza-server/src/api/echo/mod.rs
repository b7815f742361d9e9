//! 连通性测试路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/test | GET | 固定响应 |
//! | /api/test | POST | 原样回显 JSON 请求体 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/test", get(handler::ping).post(handler::echo))
}

//! Authentication Routes
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/pizza/auth/login | POST | 登录，下发 `auth-token` Cookie |
//! | /api/pizza/auth/logout | POST | 注销，始终清除 Cookie |
//! | /api/pizza/auth/me | GET | 当前会话用户 (无会话 401) |

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pizza/auth/login", post(handler::login))
        .route("/api/pizza/auth/logout", post(handler::logout))
        .route("/api/pizza/auth/me", get(handler::me))
}

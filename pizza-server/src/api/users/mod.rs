//! User API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/v2/pizza/users | GET | 用户列表 |
//! | /api/v2/pizza/users | POST | 注册 (201，用户名重复 409) |
//! | /api/v2/pizza/users/{id} | GET / DELETE | 单个用户 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v2/pizza/users", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}

//! Order API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/v2/pizza/orders | GET | 订单列表 (新→旧) |
//! | /api/v2/pizza/orders | POST | 下单 (201) |
//! | /api/v2/pizza/orders/{id} | GET / DELETE | 单个订单 |
//! | /api/v2/pizza/orders/{id}/status | PUT | 直接写入状态 |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v2/pizza/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/status", put(handler::update_status))
}

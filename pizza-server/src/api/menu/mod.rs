//! Menu API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/v2/pizza/menu | GET | 菜单列表 (`?category=&available=`) |
//! | /api/v2/pizza/menu | POST | 新建菜品 (201) |
//! | /api/v2/pizza/menu/{id} | GET / PUT / DELETE | 单个菜品 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/v2/pizza/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}

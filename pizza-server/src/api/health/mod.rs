//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/health | GET | 进程存活检查 (不访问数据库) |
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Pizza Palace API çalışıyor",
//!   "timestamp": "2026-01-01T12:00:00.000Z",
//!   "version": "0.1.0"
//! }
//! ```

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    success: bool,
    message: &'static str,
    timestamp: String,
    version: &'static str,
}

/// Always 200
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Pizza Palace API çalışıyor",
        timestamp: super::timestamp(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

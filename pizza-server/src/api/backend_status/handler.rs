//! Backend Status Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;

/// API names with a status entry
pub const KNOWN_APIS: [&str; 5] = ["menu", "orders", "users", "auth", "paytr"];

/// Name reported for the whole-backend check
const BACKEND: &str = "backend";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    success: bool,
    api_name: String,
    available: bool,
    message: String,
}

impl StatusResponse {
    fn new(api_name: impl Into<String>, available: bool, message: impl Into<String>) -> Self {
        Self {
            success: true,
            api_name: api_name.into(),
            available,
            message: message.into(),
        }
    }
}

/// GET /api/backend-status
pub async fn backend(State(state): State<ServerState>) -> Json<StatusResponse> {
    Json(check(&state, BACKEND).await)
}

/// GET /api/backend-status/{apiName}
pub async fn api(
    State(state): State<ServerState>,
    Path(api_name): Path<String>,
) -> Json<StatusResponse> {
    Json(check(&state, &api_name).await)
}

async fn check(state: &ServerState, api_name: &str) -> StatusResponse {
    if api_name != BACKEND && !KNOWN_APIS.contains(&api_name) {
        return StatusResponse::new(api_name, false, format!("Bilinmeyen API: {api_name}"));
    }

    match state.db.ping().await {
        Ok(latency) => {
            tracing::debug!(api = api_name, latency_ms = latency.as_millis() as u64, "Database ping ok");
        }
        Err(e) => {
            tracing::warn!(api = api_name, error = %e, "Database ping failed");
            return StatusResponse::new(api_name, false, "Veritabanına ulaşılamıyor");
        }
    }

    if api_name == "paytr" && !state.config.paytr.is_configured() {
        return StatusResponse::new(api_name, false, "PayTR yapılandırılmamış");
    }

    StatusResponse::new(api_name, true, format!("{api_name} kullanılabilir"))
}

//! Test / Echo Handlers
//!
//! These two endpoints keep their own flat body shape rather than the
//! envelope: the storefront checks them directly.

use axum::{Json, http::StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::api::extract::ApiBytes;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    success: bool,
    message: &'static str,
    timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

/// GET /api/test - always 200
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        success: true,
        message: "API çalışıyor",
        timestamp: crate::api::timestamp(),
    })
}

/// POST /api/test - echo the JSON body back
///
/// An unreadable body yields 500 with `{success:false, message, error}`.
pub async fn echo(ApiBytes(body): ApiBytes) -> (StatusCode, Json<EchoResponse>) {
    match serde_json::from_slice::<Value>(&body) {
        Ok(data) => (
            StatusCode::OK,
            Json(EchoResponse {
                success: true,
                message: "POST isteği başarılı",
                data: Some(data),
                error: None,
                timestamp: Some(crate::api::timestamp()),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable echo body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(EchoResponse {
                    success: false,
                    message: "İstek işlenemedi",
                    data: None,
                    error: Some(e.to_string()),
                    timestamp: None,
                }),
            )
        }
    }
}

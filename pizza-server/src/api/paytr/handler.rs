//! PayTR Handlers

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, Method, StatusCode, header::ALLOW},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::extract::ApiBytes;
use crate::core::ServerState;
use crate::services::paytr::{self, TokenRequest};
use shared::AppError;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    success: bool,
    token: String,
}

/// ANY /api/paytr/create-token
///
/// Only POST is served; every other method is answered here with 405 so the
/// body stays JSON.
pub async fn create_token(
    State(state): State<ServerState>,
    method: Method,
    headers: HeaderMap,
    ApiBytes(body): ApiBytes,
) -> Response {
    if method != Method::POST {
        let mut response = AppError::method_not_allowed().into_response();
        response
            .headers_mut()
            .insert(ALLOW, HeaderValue::from_static("POST"));
        return response;
    }

    match issue_token(&state, &headers, &body) {
        Ok(token) => (
            StatusCode::OK,
            Json(TokenResponse {
                success: true,
                token,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

fn issue_token(state: &ServerState, headers: &HeaderMap, body: &[u8]) -> Result<String, AppError> {
    let request: TokenRequest =
        serde_json::from_slice(body).map_err(|e| AppError::invalid_json(e.to_string()))?;
    let user_ip = paytr::resolve_user_ip(request.user_ip.as_deref(), headers);

    let token = paytr::create_token(&state.config.paytr, &request, &user_ip)?;

    tracing::info!(
        merchant_oid = %request.merchant_oid,
        payment_amount = request.payment_amount,
        user_ip = %user_ip,
        test_mode = state.config.paytr.test_mode,
        "PayTR token created"
    );
    Ok(token)
}

//! Authentication Handlers
//!
//! Login issues an opaque session token in the `auth-token` cookie. Sessions
//! carry no expiry and no role checks are made here.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};

use crate::api::extract::ApiJson;
use crate::auth::{SessionUser, cookie, password};
use crate::core::ServerState;
use crate::db::repository::{session, user};
use crate::security_log;
use shared::models::{LoginRequest, User};
use shared::{ApiResponse, AppError, AppResult};

/// POST /api/pizza/auth/login
pub async fn login(
    State(state): State<ServerState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> AppResult<Response> {
    let username = req.username.trim().to_string();
    if username.is_empty() || req.password.is_empty() {
        return Err(AppError::validation("Kullanıcı adı ve şifre gerekli"));
    }

    // Unified error for unknown user and wrong password
    let found = user::find_credentials(state.pool(), &username).await?;
    let user = match found {
        Some((user, hash)) if password::verify_password(&req.password, &hash) => user,
        Some(_) => {
            security_log!("WARN", "login_failed", username = username, reason = "invalid_password");
            return Err(AppError::invalid_credentials());
        }
        None => {
            security_log!("WARN", "login_failed", username = username, reason = "user_not_found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = session::create(state.pool(), user.id).await?;
    let cookie = cookie::session_cookie(&token, state.config.secure_cookies())
        .map_err(|e| AppError::internal(format!("Invalid session cookie: {e}")))?;

    tracing::info!(user_id = user.id, username = %user.username, "User logged in successfully");

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        ApiResponse::success_with_message(user, "Giriş başarılı"),
    )
        .into_response())
}

/// POST /api/pizza/auth/logout
///
/// Always 200 with the cookie cleared, whether or not a session existed.
/// Only a failing session delete turns this into a 500.
pub async fn logout(State(state): State<ServerState>, headers: HeaderMap) -> Response {
    let clear = [(SET_COOKIE, cookie::clear_cookie(state.config.secure_cookies()))];

    if let Some(token) = cookie::token_from_headers(&headers) {
        match session::delete(state.pool(), &token).await {
            Ok(existed) => {
                tracing::info!(existed, "Session ended");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to delete session");
                return (clear, AppError::database("Çıkış yapılamadı")).into_response();
            }
        }
    }

    (clear, ApiResponse::ok_with_message("Çıkış yapıldı")).into_response()
}

/// GET /api/pizza/auth/me
pub async fn me(current: SessionUser) -> ApiResponse<User> {
    ApiResponse::success(current.user)
}

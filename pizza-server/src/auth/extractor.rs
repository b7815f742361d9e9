//! Session Extractor
//!
//! Resolves the `auth-token` cookie to the logged-in user

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::AppError;
use shared::models::User;

use crate::auth::cookie;
use crate::core::ServerState;
use crate::db::repository::session;

/// 当前登录用户
///
/// Handlers taking this extractor reject requests without a valid session
/// with 401 `UNAUTHORIZED`.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user: User,
    pub token: String,
}

impl FromRequestParts<ServerState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(current) = parts.extensions.get::<SessionUser>() {
            return Ok(current.clone());
        }

        let Some(token) = cookie::token_from_headers(&parts.headers) else {
            tracing::debug!(uri = %parts.uri, "No session cookie");
            return Err(AppError::unauthorized());
        };

        let user = session::find_user(state.pool(), &token)
            .await?
            .ok_or_else(|| {
                tracing::warn!(uri = %parts.uri, "Unknown session token");
                AppError::unauthorized()
            })?;

        let current = SessionUser { user, token };
        parts.extensions.insert(current.clone());
        Ok(current)
    }
}

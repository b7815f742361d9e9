//! User API Handlers

use axum::{extract::State, http::StatusCode};

use crate::api::extract::{ApiJson, ApiPath};
use crate::core::ServerState;
use crate::db::repository::user;
use shared::models::{User, UserCreate};
use shared::{ApiResponse, AppError, AppResult};

/// GET /api/v2/pizza/users
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<User>>> {
    let users = user::find_all(state.pool()).await?;
    Ok(ApiResponse::success(users))
}

/// GET /api/v2/pizza/users/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<ApiResponse<User>> {
    let user = user::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Kullanıcı bulunamadı: {id}")))?;
    Ok(ApiResponse::success(user))
}

/// POST /api/v2/pizza/users - 201
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<UserCreate>,
) -> AppResult<(StatusCode, ApiResponse<User>)> {
    let user = user::create(state.pool(), payload).await?;
    tracing::info!(id = user.id, username = %user.username, role = ?user.role, "User created");
    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message(user, "Kullanıcı oluşturuldu"),
    ))
}

/// DELETE /api/v2/pizza/users/{id}
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<ApiResponse<()>> {
    if !user::delete(state.pool(), id).await? {
        return Err(AppError::not_found(format!("Kullanıcı bulunamadı: {id}")));
    }
    tracing::info!(id, "User deleted");
    Ok(ApiResponse::ok_with_message("Kullanıcı silindi"))
}

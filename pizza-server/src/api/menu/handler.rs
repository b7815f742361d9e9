//! Menu API Handlers

use axum::{extract::State, http::StatusCode};

use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::core::ServerState;
use crate::db::repository::menu;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate, MenuQuery};
use shared::{ApiResponse, AppError, AppResult};

/// GET /api/v2/pizza/menu - 菜单列表
///
/// Any database failure is reported as 500 `Menü alınamadı`; the detail only
/// goes to the log.
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<MenuQuery>,
) -> AppResult<ApiResponse<Vec<MenuItem>>> {
    let items = menu::find_filtered(state.pool(), &query)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Menu query failed");
            AppError::database("Menü alınamadı")
        })?;
    Ok(ApiResponse::success(items))
}

/// GET /api/v2/pizza/menu/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<ApiResponse<MenuItem>> {
    let item = menu::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Ürün bulunamadı: {id}")))?;
    Ok(ApiResponse::success(item))
}

/// POST /api/v2/pizza/menu - 201
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<MenuItemCreate>,
) -> AppResult<(StatusCode, ApiResponse<MenuItem>)> {
    let item = menu::create(state.pool(), payload).await?;
    tracing::info!(id = item.id, name = %item.name, "Menu item created");
    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message(item, "Ürün eklendi"),
    ))
}

/// PUT /api/v2/pizza/menu/{id}
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<MenuItemUpdate>,
) -> AppResult<ApiResponse<MenuItem>> {
    let item = menu::update(state.pool(), id, payload).await?;
    Ok(ApiResponse::success_with_message(item, "Ürün güncellendi"))
}

/// DELETE /api/v2/pizza/menu/{id}
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<ApiResponse<()>> {
    if !menu::delete(state.pool(), id).await? {
        return Err(AppError::not_found(format!("Ürün bulunamadı: {id}")));
    }
    tracing::info!(id, "Menu item deleted");
    Ok(ApiResponse::ok_with_message("Ürün silindi"))
}

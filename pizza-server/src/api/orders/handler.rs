//! Order API Handlers

use axum::{extract::State, http::StatusCode};

use crate::api::extract::{ApiJson, ApiPath};
use crate::core::ServerState;
use crate::db::repository::order;
use shared::models::{Order, OrderCreate, OrderStatusUpdate};
use shared::{ApiResponse, AppError, AppResult};

/// GET /api/v2/pizza/orders
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Order>>> {
    let orders = order::find_all(state.pool()).await?;
    Ok(ApiResponse::success(orders))
}

/// GET /api/v2/pizza/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<ApiResponse<Order>> {
    let order = order::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Sipariş bulunamadı: {id}")))?;
    Ok(ApiResponse::success(order))
}

/// POST /api/v2/pizza/orders - 201
///
/// Unknown or unavailable menu items reject the whole order with 400.
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<OrderCreate>,
) -> AppResult<(StatusCode, ApiResponse<Order>)> {
    let order = order::create(state.pool(), payload).await?;
    tracing::info!(
        id = order.id,
        total = order.total,
        items = order.items.len(),
        "Order created"
    );
    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message(order, "Sipariş alındı"),
    ))
}

/// PUT /api/v2/pizza/orders/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<OrderStatusUpdate>,
) -> AppResult<ApiResponse<Order>> {
    let order = order::update_status(state.pool(), id, payload.status).await?;
    tracing::info!(id, status = ?order.status, "Order status updated");
    Ok(ApiResponse::success_with_message(order, "Sipariş durumu güncellendi"))
}

/// DELETE /api/v2/pizza/orders/{id}
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<ApiResponse<()>> {
    if !order::delete(state.pool(), id).await? {
        return Err(AppError::not_found(format!("Sipariş bulunamadı: {id}")));
    }
    tracing::info!(id, "Order deleted");
    Ok(ApiResponse::ok_with_message("Sipariş silindi"))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    order_items::repo as order_items,
    orders::{
        dto::{CreateOrderRequest, OrderFilter, OrderWithItems, UpdateOrderRequest},
        repo::{self, Order},
        service,
    },
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
}

#[instrument(skip(state))]
async fn list_orders(
    State(state): State<AppState>,
    Query(filter): Query<OrderFilter>,
) -> Result<Json<ApiResponse<Vec<Order>>>, ApiError> {
    let orders = if let Some(user_id) = filter.user_id {
        repo::find_by_user(&state.db, user_id).await?
    } else if let Some(restaurant_id) = filter.restaurant_id {
        repo::find_by_restaurant(&state.db, restaurant_id).await?
    } else if let Some(status) = filter.status.as_deref() {
        repo::find_by_status(&state.db, status).await?
    } else {
        repo::find_all(&state.db).await?
    };
    Ok(Json(ApiResponse::ok(orders)))
}

#[instrument(skip(state))]
async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderWithItems>>, ApiError> {
    let order = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("order".into()))?;
    let items = order_items::find_by_order(&state.db, order.id).await?;
    Ok(Json(ApiResponse::ok(OrderWithItems { order, items })))
}

#[instrument(skip(state, payload))]
async fn create_order(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OrderWithItems>>), ApiError> {
    if payload.items.is_empty() {
        return Err(ApiError::InvalidInput(
            "Order must contain at least one item".into(),
        ));
    }
    if payload.items.iter().any(|item| item.quantity < 1) {
        return Err(ApiError::InvalidInput(
            "Item quantity must be at least 1".into(),
        ));
    }

    let order = service::create_order(&state.db, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            order,
            "Order created successfully",
        )),
    ))
}

#[instrument(skip(state, payload))]
async fn update_order(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderRequest>,
) -> Result<Json<ApiResponse<OrderWithItems>>, ApiError> {
    let order = service::update_order(&state.db, id, &payload).await?;
    Ok(Json(ApiResponse::with_message(
        order,
        "Order updated successfully",
    )))
}

#[instrument(skip(state))]
async fn delete_order(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    if !repo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("order".into()));
    }
    info!(order_id = %id, "order deleted");
    Ok(Json(ApiResponse::with_message(
        true,
        "Order deleted successfully",
    )))
}

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    order_items::{
        dto::{OrderItemFilter, UpdateOrderItemRequest},
        repo::{self, OrderItem},
    },
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order-items", get(list_order_items))
        .route(
            "/order-items/:id",
            get(get_order_item)
                .put(update_order_item)
                .delete(delete_order_item),
        )
}

#[instrument(skip(state))]
async fn list_order_items(
    State(state): State<AppState>,
    Query(filter): Query<OrderItemFilter>,
) -> Result<Json<ApiResponse<Vec<OrderItem>>>, ApiError> {
    let items = match filter.order_id {
        Some(order_id) => repo::find_by_order(&state.db, order_id).await?,
        None => repo::find_all(&state.db).await?,
    };
    Ok(Json(ApiResponse::ok(items)))
}

#[instrument(skip(state))]
async fn get_order_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderItem>>, ApiError> {
    let item = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("order item".into()))?;
    Ok(Json(ApiResponse::ok(item)))
}

#[instrument(skip(state, payload))]
async fn update_order_item(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderItemRequest>,
) -> Result<Json<ApiResponse<OrderItem>>, ApiError> {
    if let Some(quantity) = payload.quantity {
        if quantity < 1 {
            return Err(ApiError::InvalidInput(
                "Item quantity must be at least 1".into(),
            ));
        }
    }

    let item = repo::update(
        &state.db,
        id,
        payload.quantity,
        payload.special_instructions.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("order item".into()))?;

    info!(order_item_id = %item.id, "order item updated");
    Ok(Json(ApiResponse::with_message(
        item,
        "Order item updated successfully",
    )))
}

#[instrument(skip(state))]
async fn delete_order_item(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    if !repo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("order item".into()));
    }
    info!(order_item_id = %id, "order item deleted");
    Ok(Json(ApiResponse::with_message(
        true,
        "Order item deleted successfully",
    )))
}

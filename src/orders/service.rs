use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::ApiError,
    order_items::repo as order_items,
    orders::{
        dto::{CreateOrderRequest, OrderWithItems, UpdateOrderRequest, ORDER_STATUSES, PAYMENT_STATUSES},
        pricing::{line_subtotal, resolve_effective_price},
        repo as orders,
    },
    pizzas::repo as pizzas,
    restaurant_pizzas::repo as restaurant_pizzas,
    restaurants::repo as restaurants,
    users::repo as users,
};

/// Validates the request, resolves every item's price exactly once, and
/// writes the order row plus all item rows in a single transaction.
///
/// Each item's resolved price feeds both the running total and that
/// item's snapshot, so `total_amount` equals the sum of the subtotals
/// even if a listing is repriced concurrently.
pub async fn create_order(db: &PgPool, req: &CreateOrderRequest) -> Result<OrderWithItems, ApiError> {
    // Handlers validate too; kept here as a safety net for other callers.
    if req.items.is_empty() {
        return Err(ApiError::InvalidInput(
            "Order must contain at least one item".into(),
        ));
    }
    if req.items.iter().any(|item| item.quantity < 1) {
        return Err(ApiError::InvalidInput(
            "Item quantity must be at least 1".into(),
        ));
    }
    if req.delivery_address.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "Delivery address is required".into(),
        ));
    }

    if users::find_by_id(db, req.user_id).await?.is_none() {
        return Err(ApiError::NotFound("user".into()));
    }

    let mut tx = db.begin().await.map_err(ApiError::from)?;

    if restaurants::find_by_id(&mut *tx, req.restaurant_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("restaurant".into()));
    }

    let mut total_amount = Decimal::ZERO;
    let mut priced_lines = Vec::with_capacity(req.items.len());

    for item in &req.items {
        let pizza = pizzas::find_by_id(&mut *tx, item.pizza_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("pizza".into()))?;

        let listing =
            restaurant_pizzas::find_by_pair(&mut *tx, req.restaurant_id, item.pizza_id).await?;
        let resolved = resolve_effective_price(&pizza, listing.as_ref());

        if !resolved.available {
            return Err(ApiError::Unavailable(format!(
                "Pizza '{}' is currently unavailable at this restaurant",
                pizza.name
            )));
        }

        let subtotal = line_subtotal(resolved.price, item.quantity);
        total_amount += subtotal;
        priced_lines.push((item, resolved.price, subtotal));
    }

    let order = orders::insert(
        &mut *tx,
        req.user_id,
        req.restaurant_id,
        total_amount,
        &req.delivery_address,
        &req.payment_method,
        req.notes.as_deref(),
    )
    .await?;

    let mut items = Vec::with_capacity(priced_lines.len());
    for (item, price_per_item, subtotal) in priced_lines {
        let row = order_items::insert(
            &mut *tx,
            order.id,
            item.pizza_id,
            item.quantity,
            price_per_item,
            subtotal,
            item.special_instructions.as_deref(),
        )
        .await?;
        items.push(row);
    }

    tx.commit().await.map_err(ApiError::from)?;

    info!(
        order_id = %order.id,
        user_id = %order.user_id,
        restaurant_id = %order.restaurant_id,
        total = %order.total_amount,
        "order created"
    );
    Ok(OrderWithItems { order, items })
}

/// Partial order update. Status values are checked for set membership
/// only; no transition graph is enforced.
pub async fn update_order(
    db: &PgPool,
    id: Uuid,
    req: &UpdateOrderRequest,
) -> Result<OrderWithItems, ApiError> {
    if let Some(status) = req.status.as_deref() {
        if !ORDER_STATUSES.contains(&status) {
            return Err(ApiError::InvalidInput(format!(
                "Unknown order status '{status}'"
            )));
        }
    }
    if let Some(payment_status) = req.payment_status.as_deref() {
        if !PAYMENT_STATUSES.contains(&payment_status) {
            return Err(ApiError::InvalidInput(format!(
                "Unknown payment status '{payment_status}'"
            )));
        }
    }

    let order = orders::update(
        db,
        id,
        req.status.as_deref(),
        req.payment_status.as_deref(),
        req.delivery_address.as_deref(),
        req.notes.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("order".into()))?;

    let items = order_items::find_by_order(db, order.id).await?;
    info!(order_id = %order.id, "order updated");
    Ok(OrderWithItems { order, items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{orders::dto::CreateOrderItemRequest, state::AppState};

    // Validation runs before any query, so the lazy pool never connects.
    fn request(items: Vec<CreateOrderItemRequest>) -> CreateOrderRequest {
        CreateOrderRequest {
            user_id: Uuid::new_v4(),
            restaurant_id: Uuid::new_v4(),
            delivery_address: "1 Via Roma".into(),
            payment_method: "cash".into(),
            notes: None,
            items,
        }
    }

    fn line(quantity: i32) -> CreateOrderItemRequest {
        CreateOrderItemRequest {
            pizza_id: Uuid::new_v4(),
            quantity,
            special_instructions: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_empty_item_list() {
        let state = AppState::fake();
        let err = create_order(&state.db, &request(vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn create_rejects_zero_quantity() {
        let state = AppState::fake();
        let err = create_order(&state.db, &request(vec![line(2), line(0)]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn create_rejects_blank_delivery_address() {
        let state = AppState::fake();
        let mut req = request(vec![line(1)]);
        req.delivery_address = "   ".into();
        let err = create_order(&state.db, &req).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn update_rejects_unknown_status() {
        let state = AppState::fake();
        let req = UpdateOrderRequest {
            status: Some("teleported".into()),
            payment_status: None,
            delivery_address: None,
            notes: None,
        };
        let err = update_order(&state.db, Uuid::new_v4(), &req)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}

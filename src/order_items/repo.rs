use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// A line of an order. `price_per_item` is the price resolved when the
/// order was placed and never changes afterwards; `subtotal` is always
/// `price_per_item * quantity`.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub pizza_id: Uuid,
    pub quantity: i32,
    pub price_per_item: Decimal,
    pub subtotal: Decimal,
    pub special_instructions: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

const COLUMNS: &str =
    "id, order_id, pizza_id, quantity, price_per_item, subtotal, special_instructions, created_at";

pub async fn find_all(db: &PgPool) -> Result<Vec<OrderItem>, sqlx::Error> {
    sqlx::query_as::<_, OrderItem>(&format!(
        "SELECT {COLUMNS} FROM order_items ORDER BY created_at DESC"
    ))
    .fetch_all(db)
    .await
}

pub async fn find_by_order(db: &PgPool, order_id: Uuid) -> Result<Vec<OrderItem>, sqlx::Error> {
    sqlx::query_as::<_, OrderItem>(&format!(
        "SELECT {COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY created_at"
    ))
    .bind(order_id)
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<OrderItem>, sqlx::Error> {
    sqlx::query_as::<_, OrderItem>(&format!("SELECT {COLUMNS} FROM order_items WHERE id = $1"))
        .bind(id)
        .fetch_optional(db)
        .await
}

// Insert runs inside the order-creation transaction.
pub async fn insert<'e, E>(
    db: E,
    order_id: Uuid,
    pizza_id: Uuid,
    quantity: i32,
    price_per_item: Decimal,
    subtotal: Decimal,
    special_instructions: Option<&str>,
) -> Result<OrderItem, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_as::<_, OrderItem>(&format!(
        r#"
        INSERT INTO order_items (order_id, pizza_id, quantity, price_per_item, subtotal, special_instructions)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(order_id)
    .bind(pizza_id)
    .bind(quantity)
    .bind(price_per_item)
    .bind(subtotal)
    .bind(special_instructions)
    .fetch_one(db)
    .await
}

/// Partial update. A quantity change recomputes the subtotal from the
/// stored `price_per_item`, which itself is never touched.
pub async fn update(
    db: &PgPool,
    id: Uuid,
    quantity: Option<i32>,
    special_instructions: Option<&str>,
) -> Result<Option<OrderItem>, sqlx::Error> {
    sqlx::query_as::<_, OrderItem>(&format!(
        r#"
        UPDATE order_items SET
            quantity = COALESCE($2, quantity),
            subtotal = price_per_item * COALESCE($2, quantity),
            special_instructions = COALESCE($3, special_instructions)
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(quantity)
    .bind(special_instructions)
    .fetch_optional(db)
    .await
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM order_items WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

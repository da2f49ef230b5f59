use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub status: String,
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub payment_method: String,
    pub payment_status: String,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

const COLUMNS: &str = "id, user_id, restaurant_id, status, total_amount, delivery_address, payment_method, payment_status, notes, created_at, updated_at";

pub async fn find_all(db: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "SELECT {COLUMNS} FROM orders ORDER BY created_at DESC"
    ))
    .fetch_all(db)
    .await
}

pub async fn find_by_user(db: &PgPool, user_id: Uuid) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "SELECT {COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn find_by_restaurant(
    db: &PgPool,
    restaurant_id: Uuid,
) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "SELECT {COLUMNS} FROM orders WHERE restaurant_id = $1 ORDER BY created_at DESC"
    ))
    .bind(restaurant_id)
    .fetch_all(db)
    .await
}

pub async fn find_by_status(db: &PgPool, status: &str) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "SELECT {COLUMNS} FROM orders WHERE status = $1 ORDER BY created_at DESC"
    ))
    .bind(status)
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!("SELECT {COLUMNS} FROM orders WHERE id = $1"))
        .bind(id)
        .fetch_optional(db)
        .await
}

// Insert runs inside the order-creation transaction, so the order row and
// its item rows commit or roll back as one unit.
pub async fn insert<'e, E>(
    db: E,
    user_id: Uuid,
    restaurant_id: Uuid,
    total_amount: Decimal,
    delivery_address: &str,
    payment_method: &str,
    notes: Option<&str>,
) -> Result<Order, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_as::<_, Order>(&format!(
        r#"
        INSERT INTO orders (user_id, restaurant_id, total_amount, delivery_address, payment_method, notes)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(restaurant_id)
    .bind(total_amount)
    .bind(delivery_address)
    .bind(payment_method)
    .bind(notes)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: Uuid,
    status: Option<&str>,
    payment_status: Option<&str>,
    delivery_address: Option<&str>,
    notes: Option<&str>,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        r#"
        UPDATE orders SET
            status = COALESCE($2, status),
            payment_status = COALESCE($3, payment_status),
            delivery_address = COALESCE($4, delivery_address),
            notes = COALESCE($5, notes),
            updated_at = now()
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(status)
    .bind(payment_status)
    .bind(delivery_address)
    .bind(notes)
    .fetch_optional(db)
    .await
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

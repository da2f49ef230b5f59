use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Restaurant-specific listing of a pizza: overrides the catalog base
/// price and carries the availability flag. At most one row per
/// (restaurant, pizza) pair.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPizza {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub pizza_id: Uuid,
    pub price: Decimal,
    pub is_available: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

const COLUMNS: &str = "id, restaurant_id, pizza_id, price, is_available, created_at, updated_at";

pub async fn find_all(db: &PgPool) -> Result<Vec<RestaurantPizza>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantPizza>(&format!(
        "SELECT {COLUMNS} FROM restaurant_pizzas ORDER BY created_at DESC"
    ))
    .fetch_all(db)
    .await
}

pub async fn find_by_restaurant(
    db: &PgPool,
    restaurant_id: Uuid,
) -> Result<Vec<RestaurantPizza>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantPizza>(&format!(
        "SELECT {COLUMNS} FROM restaurant_pizzas WHERE restaurant_id = $1"
    ))
    .bind(restaurant_id)
    .fetch_all(db)
    .await
}

pub async fn find_by_pizza(
    db: &PgPool,
    pizza_id: Uuid,
) -> Result<Vec<RestaurantPizza>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantPizza>(&format!(
        "SELECT {COLUMNS} FROM restaurant_pizzas WHERE pizza_id = $1"
    ))
    .bind(pizza_id)
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<RestaurantPizza>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantPizza>(&format!(
        "SELECT {COLUMNS} FROM restaurant_pizzas WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(db)
    .await
}

// Executor-generic so order creation can read inside its transaction.
pub async fn find_by_pair<'e, E>(
    db: E,
    restaurant_id: Uuid,
    pizza_id: Uuid,
) -> Result<Option<RestaurantPizza>, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_as::<_, RestaurantPizza>(&format!(
        "SELECT {COLUMNS} FROM restaurant_pizzas WHERE restaurant_id = $1 AND pizza_id = $2"
    ))
    .bind(restaurant_id)
    .bind(pizza_id)
    .fetch_optional(db)
    .await
}

pub async fn create(
    db: &PgPool,
    restaurant_id: Uuid,
    pizza_id: Uuid,
    price: Decimal,
    is_available: bool,
) -> Result<RestaurantPizza, sqlx::Error> {
    sqlx::query_as::<_, RestaurantPizza>(&format!(
        r#"
        INSERT INTO restaurant_pizzas (restaurant_id, pizza_id, price, is_available)
        VALUES ($1, $2, $3, $4)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(restaurant_id)
    .bind(pizza_id)
    .bind(price)
    .bind(is_available)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: Uuid,
    price: Option<Decimal>,
    is_available: Option<bool>,
) -> Result<Option<RestaurantPizza>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantPizza>(&format!(
        r#"
        UPDATE restaurant_pizzas SET
            price = COALESCE($2, price),
            is_available = COALESCE($3, is_available),
            updated_at = now()
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(price)
    .bind(is_available)
    .fetch_optional(db)
    .await
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM restaurant_pizzas WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Catalog pizza. `base_price` is the fallback used when a restaurant
/// has no listing for it.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub base_price: Decimal,
    pub category: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

const COLUMNS: &str = "id, name, description, image_url, base_price, category, created_at, updated_at";

pub async fn find_all(db: &PgPool) -> Result<Vec<Pizza>, sqlx::Error> {
    sqlx::query_as::<_, Pizza>(&format!("SELECT {COLUMNS} FROM pizzas ORDER BY name"))
        .fetch_all(db)
        .await
}

pub async fn find_by_category(db: &PgPool, category: &str) -> Result<Vec<Pizza>, sqlx::Error> {
    sqlx::query_as::<_, Pizza>(&format!(
        "SELECT {COLUMNS} FROM pizzas WHERE category = $1 ORDER BY name"
    ))
    .bind(category)
    .fetch_all(db)
    .await
}

// Executor-generic so order creation can read inside its transaction.
pub async fn find_by_id<'e, E>(db: E, id: Uuid) -> Result<Option<Pizza>, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_as::<_, Pizza>(&format!("SELECT {COLUMNS} FROM pizzas WHERE id = $1"))
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn create(
    db: &PgPool,
    name: &str,
    description: Option<&str>,
    image_url: Option<&str>,
    base_price: Decimal,
    category: &str,
) -> Result<Pizza, sqlx::Error> {
    sqlx::query_as::<_, Pizza>(&format!(
        r#"
        INSERT INTO pizzas (name, description, image_url, base_price, category)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(name)
    .bind(description)
    .bind(image_url)
    .bind(base_price)
    .bind(category)
    .fetch_one(db)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn update(
    db: &PgPool,
    id: Uuid,
    name: Option<&str>,
    description: Option<&str>,
    image_url: Option<&str>,
    base_price: Option<Decimal>,
    category: Option<&str>,
) -> Result<Option<Pizza>, sqlx::Error> {
    sqlx::query_as::<_, Pizza>(&format!(
        r#"
        UPDATE pizzas SET
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            image_url = COALESCE($4, image_url),
            base_price = COALESCE($5, base_price),
            category = COALESCE($6, category),
            updated_at = now()
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(image_url)
    .bind(base_price)
    .bind(category)
    .fetch_optional(db)
    .await
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM pizzas WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

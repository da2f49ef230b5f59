use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub owner_id: Uuid,
    pub rating: Decimal,
    pub image_url: Option<String>,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

const COLUMNS: &str = "id, name, address, phone, email, owner_id, rating, image_url, is_active, created_at, updated_at";

pub async fn find_all(db: &PgPool) -> Result<Vec<Restaurant>, sqlx::Error> {
    sqlx::query_as::<_, Restaurant>(&format!(
        "SELECT {COLUMNS} FROM restaurants ORDER BY name"
    ))
    .fetch_all(db)
    .await
}

pub async fn find_by_owner(db: &PgPool, owner_id: Uuid) -> Result<Vec<Restaurant>, sqlx::Error> {
    sqlx::query_as::<_, Restaurant>(&format!(
        "SELECT {COLUMNS} FROM restaurants WHERE owner_id = $1 ORDER BY name"
    ))
    .bind(owner_id)
    .fetch_all(db)
    .await
}

pub async fn find_by_active(db: &PgPool, active: bool) -> Result<Vec<Restaurant>, sqlx::Error> {
    sqlx::query_as::<_, Restaurant>(&format!(
        "SELECT {COLUMNS} FROM restaurants WHERE is_active = $1 ORDER BY name"
    ))
    .bind(active)
    .fetch_all(db)
    .await
}

// Executor-generic so order creation can read inside its transaction.
pub async fn find_by_id<'e, E>(db: E, id: Uuid) -> Result<Option<Restaurant>, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_as::<_, Restaurant>(&format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1"))
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn create(
    db: &PgPool,
    name: &str,
    address: &str,
    phone: Option<&str>,
    email: Option<&str>,
    owner_id: Uuid,
    image_url: Option<&str>,
) -> Result<Restaurant, sqlx::Error> {
    sqlx::query_as::<_, Restaurant>(&format!(
        r#"
        INSERT INTO restaurants (name, address, phone, email, owner_id, image_url)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(name)
    .bind(address)
    .bind(phone)
    .bind(email)
    .bind(owner_id)
    .bind(image_url)
    .fetch_one(db)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn update(
    db: &PgPool,
    id: Uuid,
    name: Option<&str>,
    address: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
    rating: Option<Decimal>,
    image_url: Option<&str>,
    is_active: Option<bool>,
) -> Result<Option<Restaurant>, sqlx::Error> {
    sqlx::query_as::<_, Restaurant>(&format!(
        r#"
        UPDATE restaurants SET
            name = COALESCE($2, name),
            address = COALESCE($3, address),
            phone = COALESCE($4, phone),
            email = COALESCE($5, email),
            rating = COALESCE($6, rating),
            image_url = COALESCE($7, image_url),
            is_active = COALESCE($8, is_active),
            updated_at = now()
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(name)
    .bind(address)
    .bind(phone)
    .bind(email)
    .bind(rating)
    .bind(image_url)
    .bind(is_active)
    .fetch_optional(db)
    .await
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    pizzas::{
        dto::{CreatePizzaRequest, PizzaFilter, UpdatePizzaRequest},
        repo::{self, Pizza},
    },
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pizzas", get(list_pizzas).post(create_pizza))
        .route(
            "/pizzas/:id",
            get(get_pizza).put(update_pizza).delete(delete_pizza),
        )
}

fn validate_price(price: Decimal) -> Result<(), ApiError> {
    if price <= Decimal::ZERO {
        return Err(ApiError::InvalidInput("Price must be positive".into()));
    }
    Ok(())
}

#[instrument(skip(state))]
async fn list_pizzas(
    State(state): State<AppState>,
    Query(filter): Query<PizzaFilter>,
) -> Result<Json<ApiResponse<Vec<Pizza>>>, ApiError> {
    let pizzas = match filter.category.as_deref() {
        Some(category) => repo::find_by_category(&state.db, category).await?,
        None => repo::find_all(&state.db).await?,
    };
    Ok(Json(ApiResponse::ok(pizzas)))
}

#[instrument(skip(state))]
async fn get_pizza(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Pizza>>, ApiError> {
    let pizza = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("pizza".into()))?;
    Ok(Json(ApiResponse::ok(pizza)))
}

#[instrument(skip(state, payload))]
async fn create_pizza(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<CreatePizzaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Pizza>>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::InvalidInput("Name is required".into()));
    }
    validate_price(payload.base_price)?;

    let pizza = repo::create(
        &state.db,
        &payload.name,
        payload.description.as_deref(),
        payload.image_url.as_deref(),
        payload.base_price,
        &payload.category,
    )
    .await?;

    info!(pizza_id = %pizza.id, name = %pizza.name, "pizza created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            pizza,
            "Pizza created successfully",
        )),
    ))
}

#[instrument(skip(state, payload))]
async fn update_pizza(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePizzaRequest>,
) -> Result<Json<ApiResponse<Pizza>>, ApiError> {
    if let Some(price) = payload.base_price {
        validate_price(price)?;
    }

    let pizza = repo::update(
        &state.db,
        id,
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.image_url.as_deref(),
        payload.base_price,
        payload.category.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("pizza".into()))?;

    info!(pizza_id = %pizza.id, "pizza updated");
    Ok(Json(ApiResponse::with_message(
        pizza,
        "Pizza updated successfully",
    )))
}

#[instrument(skip(state))]
async fn delete_pizza(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    if !repo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("pizza".into()));
    }
    info!(pizza_id = %id, "pizza deleted");
    Ok(Json(ApiResponse::with_message(
        true,
        "Pizza deleted successfully",
    )))
}

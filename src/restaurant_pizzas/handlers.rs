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
    pizzas::repo as pizzas,
    response::ApiResponse,
    restaurant_pizzas::{
        dto::{CreateRestaurantPizzaRequest, RestaurantPizzaFilter, UpdateRestaurantPizzaRequest},
        repo::{self, RestaurantPizza},
    },
    restaurants::repo as restaurants,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/restaurant-pizzas",
            get(list_restaurant_pizzas).post(create_restaurant_pizza),
        )
        .route(
            "/restaurant-pizzas/:id",
            get(get_restaurant_pizza)
                .put(update_restaurant_pizza)
                .delete(delete_restaurant_pizza),
        )
}

#[instrument(skip(state))]
async fn list_restaurant_pizzas(
    State(state): State<AppState>,
    Query(filter): Query<RestaurantPizzaFilter>,
) -> Result<Json<ApiResponse<Vec<RestaurantPizza>>>, ApiError> {
    let listings = if let Some(restaurant_id) = filter.restaurant_id {
        repo::find_by_restaurant(&state.db, restaurant_id).await?
    } else if let Some(pizza_id) = filter.pizza_id {
        repo::find_by_pizza(&state.db, pizza_id).await?
    } else {
        repo::find_all(&state.db).await?
    };
    Ok(Json(ApiResponse::ok(listings)))
}

#[instrument(skip(state))]
async fn get_restaurant_pizza(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RestaurantPizza>>, ApiError> {
    let listing = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("restaurant pizza".into()))?;
    Ok(Json(ApiResponse::ok(listing)))
}

#[instrument(skip(state, payload))]
async fn create_restaurant_pizza(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RestaurantPizza>>), ApiError> {
    if payload.price <= Decimal::ZERO {
        return Err(ApiError::InvalidInput("Price must be positive".into()));
    }
    if restaurants::find_by_id(&state.db, payload.restaurant_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("restaurant".into()));
    }
    if pizzas::find_by_id(&state.db, payload.pizza_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound("pizza".into()));
    }
    if repo::find_by_pair(&state.db, payload.restaurant_id, payload.pizza_id)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "Pizza is already listed at this restaurant".into(),
        ));
    }

    // The unique index still backstops a concurrent duplicate insert.
    let listing = repo::create(
        &state.db,
        payload.restaurant_id,
        payload.pizza_id,
        payload.price,
        payload.is_available,
    )
    .await?;

    info!(
        listing_id = %listing.id,
        restaurant_id = %listing.restaurant_id,
        pizza_id = %listing.pizza_id,
        "restaurant pizza created"
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            listing,
            "Restaurant pizza created successfully",
        )),
    ))
}

#[instrument(skip(state, payload))]
async fn update_restaurant_pizza(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRestaurantPizzaRequest>,
) -> Result<Json<ApiResponse<RestaurantPizza>>, ApiError> {
    if let Some(price) = payload.price {
        if price <= Decimal::ZERO {
            return Err(ApiError::InvalidInput("Price must be positive".into()));
        }
    }

    let listing = repo::update(&state.db, id, payload.price, payload.is_available)
        .await?
        .ok_or_else(|| ApiError::NotFound("restaurant pizza".into()))?;

    info!(listing_id = %listing.id, "restaurant pizza updated");
    Ok(Json(ApiResponse::with_message(
        listing,
        "Restaurant pizza updated successfully",
    )))
}

#[instrument(skip(state))]
async fn delete_restaurant_pizza(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    if !repo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("restaurant pizza".into()));
    }
    info!(listing_id = %id, "restaurant pizza deleted");
    Ok(Json(ApiResponse::with_message(
        true,
        "Restaurant pizza deleted successfully",
    )))
}

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
    response::ApiResponse,
    restaurants::{
        dto::{CreateRestaurantRequest, RestaurantFilter, UpdateRestaurantRequest},
        repo::{self, Restaurant},
    },
    state::AppState,
    users::repo as users,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route(
            "/restaurants/:id",
            get(get_restaurant)
                .put(update_restaurant)
                .delete(delete_restaurant),
        )
}

#[instrument(skip(state))]
async fn list_restaurants(
    State(state): State<AppState>,
    Query(filter): Query<RestaurantFilter>,
) -> Result<Json<ApiResponse<Vec<Restaurant>>>, ApiError> {
    let restaurants = if let Some(owner_id) = filter.owner_id {
        repo::find_by_owner(&state.db, owner_id).await?
    } else if let Some(active) = filter.active {
        repo::find_by_active(&state.db, active).await?
    } else {
        repo::find_all(&state.db).await?
    };
    Ok(Json(ApiResponse::ok(restaurants)))
}

#[instrument(skip(state))]
async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Restaurant>>, ApiError> {
    let restaurant = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("restaurant".into()))?;
    Ok(Json(ApiResponse::ok(restaurant)))
}

#[instrument(skip(state, payload))]
async fn create_restaurant(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<CreateRestaurantRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Restaurant>>), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::InvalidInput("Name is required".into()));
    }
    if payload.address.trim().is_empty() {
        return Err(ApiError::InvalidInput("Address is required".into()));
    }
    if users::find_by_id(&state.db, payload.owner_id).await?.is_none() {
        return Err(ApiError::NotFound("owner".into()));
    }

    let restaurant = repo::create(
        &state.db,
        &payload.name,
        &payload.address,
        payload.phone.as_deref(),
        payload.email.as_deref(),
        payload.owner_id,
        payload.image_url.as_deref(),
    )
    .await?;

    info!(restaurant_id = %restaurant.id, name = %restaurant.name, "restaurant created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            restaurant,
            "Restaurant created successfully",
        )),
    ))
}

#[instrument(skip(state, payload))]
async fn update_restaurant(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRestaurantRequest>,
) -> Result<Json<ApiResponse<Restaurant>>, ApiError> {
    if let Some(rating) = payload.rating {
        if rating < Decimal::ZERO || rating > Decimal::from(5) {
            return Err(ApiError::InvalidInput(
                "Rating must be between 0 and 5".into(),
            ));
        }
    }

    let restaurant = repo::update(
        &state.db,
        id,
        payload.name.as_deref(),
        payload.address.as_deref(),
        payload.phone.as_deref(),
        payload.email.as_deref(),
        payload.rating,
        payload.image_url.as_deref(),
        payload.is_active,
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("restaurant".into()))?;

    info!(restaurant_id = %restaurant.id, "restaurant updated");
    Ok(Json(ApiResponse::with_message(
        restaurant,
        "Restaurant updated successfully",
    )))
}

#[instrument(skip(state))]
async fn delete_restaurant(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    if !repo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("restaurant".into()));
    }
    info!(restaurant_id = %id, "restaurant deleted");
    Ok(Json(ApiResponse::with_message(
        true,
        "Restaurant deleted successfully",
    )))
}

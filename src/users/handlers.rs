use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{is_valid_email, jwt::AuthUser, password::hash_password},
    error::ApiError,
    response::ApiResponse,
    state::AppState,
    users::{
        dto::{PublicUser, UpdateUserRequest, ROLES},
        repo,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[instrument(skip(state))]
async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PublicUser>>>, ApiError> {
    let users = repo::find_all(&state.db).await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(PublicUser::from).collect(),
    )))
}

#[instrument(skip(state))]
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PublicUser>>, ApiError> {
    let user = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("user".into()))?;
    Ok(Json(ApiResponse::ok(user.into())))
}

#[instrument(skip(state, payload))]
async fn update_user(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
    Json(mut payload): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<PublicUser>>, ApiError> {
    if let Some(email) = payload.email.as_mut() {
        *email = email.trim().to_lowercase();
        if !is_valid_email(email) {
            warn!(email = %email, "invalid email");
            return Err(ApiError::InvalidInput("Invalid email".into()));
        }
    }
    if let Some(role) = payload.role.as_deref() {
        if !ROLES.contains(&role) {
            return Err(ApiError::InvalidInput(format!("Unknown role '{role}'")));
        }
    }
    let password_hash = match payload.password.as_deref() {
        Some(p) if p.len() < 8 => {
            return Err(ApiError::InvalidInput("Password too short".into()))
        }
        Some(p) => Some(hash_password(p)?),
        None => None,
    };

    let user = repo::update(
        &state.db,
        id,
        payload.username.as_deref(),
        payload.email.as_deref(),
        password_hash.as_deref(),
        payload.role.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("user".into()))?;

    info!(user_id = %user.id, "user updated");
    Ok(Json(ApiResponse::with_message(
        user.into(),
        "User updated successfully",
    )))
}

#[instrument(skip(state))]
async fn delete_user(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    if !repo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("user".into()));
    }
    info!(user_id = %id, "user deleted");
    Ok(Json(ApiResponse::with_message(
        true,
        "User deleted successfully",
    )))
}

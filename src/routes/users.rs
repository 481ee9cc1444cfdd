use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::user::{CreateUserRequest, UpdateUserRequest};
use crate::error::AppError;
use crate::services::UsersService;
use crate::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let users = UsersService::list_infos(&mut conn)?;
    Ok(Json(ApiResponse::success(users, "Users retrieved successfully")))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let user = UsersService::get_info(&mut conn, user_id)?;
    Ok(Json(ApiResponse::success(user, "User retrieved successfully")))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let user = UsersService::create(&mut conn, &payload, state.config.bcrypt_cost)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(user, "User created successfully")),
    ))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let user = UsersService::update(&mut conn, user_id, &payload, state.config.bcrypt_cost)?;
    Ok(Json(ApiResponse::success(user, "User updated successfully")))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    UsersService::delete(&mut conn, user_id)?;
    Ok(Json(ApiResponse::<()>::ok("User deleted successfully")))
}

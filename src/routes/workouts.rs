use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::workout::{CreateWorkoutRequest, UpdateWorkoutRequest};
use crate::error::AppError;
use crate::services::WorkoutsService;
use crate::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_workouts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let workouts = WorkoutsService::list(&mut conn)?;
    Ok(Json(ApiResponse::success(
        workouts,
        "Workouts retrieved successfully",
    )))
}

pub async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(workout_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let workout = WorkoutsService::get(&mut conn, workout_id)?;
    Ok(Json(ApiResponse::success(
        workout,
        "Workout retrieved successfully",
    )))
}

pub async fn create_workout(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<CreateWorkoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let workout = WorkoutsService::create(&mut conn, &payload)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(workout, "Workout created successfully")),
    ))
}

pub async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(workout_id): Path<Uuid>,
    Json(payload): Json<UpdateWorkoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let workout = WorkoutsService::update(&mut conn, workout_id, &payload)?;
    Ok(Json(ApiResponse::success(
        workout,
        "Workout updated successfully",
    )))
}

pub async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(workout_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    WorkoutsService::delete(&mut conn, workout_id)?;
    Ok(Json(ApiResponse::<()>::ok("Workout deleted successfully")))
}

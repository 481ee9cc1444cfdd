use crate::AppState;
use crate::db::models::activity::{CreateActivityRequest, UpdateActivityRequest};
use crate::db::models::api::ApiResponse;
use crate::error::AppError;
use crate::services::ActivitiesService;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_activities(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let activities = ActivitiesService::list_infos(&mut conn)?;
    Ok(Json(ApiResponse::success(
        activities,
        "Activities retrieved successfully",
    )))
}

pub async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let activity = ActivitiesService::get_info(&mut conn, activity_id)?;
    Ok(Json(ApiResponse::success(
        activity,
        "Activity retrieved successfully",
    )))
}

pub async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateActivityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let activity = ActivitiesService::create(&mut conn, &payload)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(activity, "Activity created successfully")),
    ))
}

pub async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<Uuid>,
    Json(payload): Json<UpdateActivityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let activity = ActivitiesService::update(&mut conn, activity_id, &payload)?;
    Ok(Json(ApiResponse::success(
        activity,
        "Activity updated successfully",
    )))
}

pub async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    ActivitiesService::delete(&mut conn, activity_id)?;
    Ok(Json(ApiResponse::<()>::ok("Activity deleted successfully")))
}

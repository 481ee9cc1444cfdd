use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::leaderboard::{
    CreateLeaderboardEntryRequest, UpdateLeaderboardEntryRequest,
};
use crate::error::AppError;
use crate::services::LeaderboardService;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let entries = LeaderboardService::list_infos(&mut conn)?;
    Ok(Json(ApiResponse::success(
        entries,
        "Leaderboard retrieved successfully",
    )))
}

pub async fn get_leaderboard_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let entry = LeaderboardService::get_info(&mut conn, entry_id)?;
    Ok(Json(ApiResponse::success(
        entry,
        "Leaderboard entry retrieved successfully",
    )))
}

pub async fn create_leaderboard_entry(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateLeaderboardEntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let entry = LeaderboardService::create(&mut conn, &payload)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            entry,
            "Leaderboard entry created successfully",
        )),
    ))
}

pub async fn update_leaderboard_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<Uuid>,
    Json(payload): Json<UpdateLeaderboardEntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let entry = LeaderboardService::update(&mut conn, entry_id, &payload)?;
    Ok(Json(ApiResponse::success(
        entry,
        "Leaderboard entry updated successfully",
    )))
}

pub async fn delete_leaderboard_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    LeaderboardService::delete(&mut conn, entry_id)?;
    Ok(Json(ApiResponse::<()>::ok(
        "Leaderboard entry deleted successfully",
    )))
}

use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::team::{CreateTeamRequest, UpdateTeamRequest};
use crate::error::AppError;
use crate::services::TeamsService;
use crate::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_teams(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let teams = TeamsService::list_infos(&mut conn)?;
    Ok(Json(ApiResponse::success(teams, "Teams retrieved successfully")))
}

pub async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let team = TeamsService::get_info(&mut conn, team_id)?;
    Ok(Json(ApiResponse::success(team, "Team retrieved successfully")))
}

pub async fn create_team(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<CreateTeamRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let team = TeamsService::create(&mut conn, &payload)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(team, "Team created successfully")),
    ))
}

pub async fn update_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<UpdateTeamRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    let team = TeamsService::update(&mut conn, team_id, &payload)?;
    Ok(Json(ApiResponse::success(team, "Team updated successfully")))
}

pub async fn delete_team(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db.get()?;
    TeamsService::delete(&mut conn, team_id)?;
    Ok(Json(ApiResponse::<()>::ok("Team deleted successfully")))
}

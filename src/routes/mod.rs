pub mod activities;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;

use crate::AppState;
use axum::{
    Json, Router,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "fittrack-backend",
        "resources": ["/teams", "/users", "/activities", "/leaderboard", "/workouts"],
    }))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/teams", get(teams::get_teams))
        .route("/teams", post(teams::create_team))
        .route("/teams/:team_id", get(teams::get_team))
        .route(
            "/teams/:team_id",
            put(teams::update_team).patch(teams::update_team),
        )
        .route("/teams/:team_id", delete(teams::delete_team))
        .route("/users", get(users::get_users))
        .route("/users", post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
        .route(
            "/users/:user_id",
            put(users::update_user).patch(users::update_user),
        )
        .route("/users/:user_id", delete(users::delete_user))
        .route("/activities", get(activities::get_activities))
        .route("/activities", post(activities::create_activity))
        .route("/activities/:activity_id", get(activities::get_activity))
        .route(
            "/activities/:activity_id",
            put(activities::update_activity).patch(activities::update_activity),
        )
        .route(
            "/activities/:activity_id",
            delete(activities::delete_activity),
        )
        .route("/leaderboard", get(leaderboard::get_leaderboard))
        .route("/leaderboard", post(leaderboard::create_leaderboard_entry))
        .route(
            "/leaderboard/:entry_id",
            get(leaderboard::get_leaderboard_entry),
        )
        .route(
            "/leaderboard/:entry_id",
            put(leaderboard::update_leaderboard_entry)
                .patch(leaderboard::update_leaderboard_entry),
        )
        .route(
            "/leaderboard/:entry_id",
            delete(leaderboard::delete_leaderboard_entry),
        )
        .route("/workouts", get(workouts::get_workouts))
        .route("/workouts", post(workouts::create_workout))
        .route("/workouts/:workout_id", get(workouts::get_workout))
        .route(
            "/workouts/:workout_id",
            put(workouts::update_workout).patch(workouts::update_workout),
        )
        .route("/workouts/:workout_id", delete(workouts::delete_workout))
        .with_state(state)
}

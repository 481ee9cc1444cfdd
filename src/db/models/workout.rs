use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::Difficulty;

// Workout models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::workouts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_minutes: i32,
    pub target_calories: i32,
    pub exercises: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::workouts)]
pub struct NewWorkout {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_minutes: i32,
    pub target_calories: i32,
    pub exercises: serde_json::Value,
}

#[derive(Deserialize, Validate)]
pub struct CreateWorkoutRequest {
    #[validate(length(min = 1, max = 100, message = "Workout name must be between 1 and 100 characters"))]
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration_minutes: i32,
    pub target_calories: i32,
    pub exercises: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdateWorkoutRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub duration_minutes: Option<i32>,
    pub target_calories: Option<i32>,
    pub exercises: Option<Vec<String>>,
}

use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::workout::{CreateWorkoutRequest, NewWorkout, UpdateWorkoutRequest, Workout},
    db::repositories::workouts::WorkoutsRepo,
    error::AppError,
    validation::workout::{validate_create_workout, validate_update_workout},
};

pub struct WorkoutsService;

impl WorkoutsService {
    pub fn create(conn: &mut PgConnection, req: &CreateWorkoutRequest) -> Result<Workout, AppError> {
        validate_create_workout(&req.name, req.duration_minutes, req.target_calories)?;

        let new_workout = NewWorkout {
            name: req.name.clone(),
            description: req.description.clone(),
            difficulty: req.difficulty.clone(),
            duration_minutes: req.duration_minutes,
            target_calories: req.target_calories,
            exercises: serde_json::json!(req.exercises),
        };

        let created = WorkoutsRepo::insert(conn, &new_workout)?;
        Ok(created)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Workout>, AppError> {
        Ok(WorkoutsRepo::list(conn)?)
    }

    pub fn get(conn: &mut PgConnection, workout_id: Uuid) -> Result<Workout, AppError> {
        WorkoutsRepo::find_by_id(conn, workout_id)?.ok_or_else(|| AppError::not_found("Workout"))
    }

    pub fn update(
        conn: &mut PgConnection,
        workout_id: Uuid,
        req: &UpdateWorkoutRequest,
    ) -> Result<Workout, AppError> {
        validate_update_workout(req)?;

        if WorkoutsRepo::find_by_id(conn, workout_id)?.is_none() {
            return Err(AppError::not_found("Workout"));
        }

        let exercises = req.exercises.as_ref().map(|list| serde_json::json!(list));
        let updated = WorkoutsRepo::update_fields(
            conn,
            workout_id,
            req.name.as_deref(),
            req.description.as_deref(),
            req.difficulty.as_ref(),
            req.duration_minutes,
            req.target_calories,
            exercises.as_ref(),
        )?;
        Ok(updated)
    }

    pub fn delete(conn: &mut PgConnection, workout_id: Uuid) -> Result<(), AppError> {
        let deleted = WorkoutsRepo::delete_by_id(conn, workout_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Workout"));
        }
        Ok(())
    }
}

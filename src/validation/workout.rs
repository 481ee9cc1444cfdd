use crate::db::models::workout::UpdateWorkoutRequest;
use crate::error::AppError;

pub fn validate_create_workout(
    name: &str,
    duration_minutes: i32,
    target_calories: i32,
) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Workout name is required"));
    }
    if duration_minutes <= 0 {
        return Err(AppError::validation("duration_minutes must be positive"));
    }
    if target_calories < 0 {
        return Err(AppError::validation("target_calories cannot be negative"));
    }
    Ok(())
}

pub fn validate_update_workout(req: &UpdateWorkoutRequest) -> Result<(), AppError> {
    if req.name.is_none()
        && req.description.is_none()
        && req.difficulty.is_none()
        && req.duration_minutes.is_none()
        && req.target_calories.is_none()
        && req.exercises.is_none()
    {
        return Err(AppError::validation("No update data provided"));
    }
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(AppError::validation("Workout name cannot be empty"));
        }
    }
    if let Some(duration) = req.duration_minutes {
        if duration <= 0 {
            return Err(AppError::validation("duration_minutes must be positive"));
        }
    }
    if let Some(calories) = req.target_calories {
        if calories < 0 {
            return Err(AppError::validation("target_calories cannot be negative"));
        }
    }
    Ok(())
}

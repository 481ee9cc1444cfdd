use crate::db::models::activity::UpdateActivityRequest;
use crate::error::AppError;

pub fn validate_create_activity(
    duration_minutes: i32,
    calories_burned: i32,
    distance_km: Option<f64>,
) -> Result<(), AppError> {
    if duration_minutes <= 0 {
        return Err(AppError::validation("duration_minutes must be positive"));
    }
    if calories_burned < 0 {
        return Err(AppError::validation("calories_burned cannot be negative"));
    }
    if let Some(distance) = distance_km {
        if distance < 0.0 {
            return Err(AppError::validation("distance_km cannot be negative"));
        }
    }
    Ok(())
}

pub fn validate_update_activity(req: &UpdateActivityRequest) -> Result<(), AppError> {
    if req.activity_type.is_none()
        && req.duration_minutes.is_none()
        && req.calories_burned.is_none()
        && req.distance_km.is_none()
        && req.description.is_none()
    {
        return Err(AppError::validation("No update data provided"));
    }
    if let Some(duration) = req.duration_minutes {
        if duration <= 0 {
            return Err(AppError::validation("duration_minutes must be positive"));
        }
    }
    if let Some(calories) = req.calories_burned {
        if calories < 0 {
            return Err(AppError::validation("calories_burned cannot be negative"));
        }
    }
    if let Some(distance) = req.distance_km {
        if distance < 0.0 {
            return Err(AppError::validation("distance_km cannot be negative"));
        }
    }
    Ok(())
}

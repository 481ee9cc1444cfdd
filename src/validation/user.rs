use crate::db::models::user::UpdateUserRequest;
use crate::error::AppError;

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        return Err(AppError::validation("Email is required"));
    }
    if !email.contains('@') {
        return Err(AppError::validation("Invalid email format"));
    }
    Ok(())
}

pub fn validate_update_user(req: &UpdateUserRequest) -> Result<(), AppError> {
    if req.username.is_none()
        && req.email.is_none()
        && req.first_name.is_none()
        && req.last_name.is_none()
        && req.password.is_none()
        && req.team_id.is_none()
        && req.points.is_none()
        && req.rank.is_none()
    {
        return Err(AppError::validation("No update data provided"));
    }
    if let Some(username) = &req.username {
        if username.trim().is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
    }
    if let Some(email) = &req.email {
        validate_email(email)?;
    }
    Ok(())
}

use crate::error::AppError;

pub fn validate_create_team(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Team name is required"));
    }
    if name.len() > 100 {
        return Err(AppError::validation(
            "Team name must be 100 characters or less",
        ));
    }
    Ok(())
}

pub fn validate_update_team(
    name: &Option<String>,
    description: &Option<String>,
) -> Result<(), AppError> {
    if name.is_none() && description.is_none() {
        return Err(AppError::validation("No update data provided"));
    }
    if let Some(name) = name {
        validate_create_team(name)?;
    }
    Ok(())
}

use crate::db::models::leaderboard::UpdateLeaderboardEntryRequest;
use crate::error::AppError;

pub fn validate_rank(rank: i32) -> Result<(), AppError> {
    if rank < 1 {
        return Err(AppError::validation("rank must be 1 or greater"));
    }
    Ok(())
}

pub fn validate_totals(
    total_points: Option<i32>,
    total_activities: Option<i32>,
    total_calories: Option<i32>,
) -> Result<(), AppError> {
    for (field, value) in [
        ("total_points", total_points),
        ("total_activities", total_activities),
        ("total_calories", total_calories),
    ] {
        if let Some(value) = value {
            if value < 0 {
                return Err(AppError::validation(format!("{} cannot be negative", field)));
            }
        }
    }
    Ok(())
}

pub fn validate_update_entry(req: &UpdateLeaderboardEntryRequest) -> Result<(), AppError> {
    if req.team_id.is_none()
        && req.total_points.is_none()
        && req.total_activities.is_none()
        && req.total_calories.is_none()
        && req.rank.is_none()
    {
        return Err(AppError::validation("No update data provided"));
    }
    validate_totals(req.total_points, req.total_activities, req.total_calories)?;
    if let Some(rank) = req.rank {
        validate_rank(rank)?;
    }
    Ok(())
}

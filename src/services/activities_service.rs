use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::activity::{
        Activity, ActivityInfo, CreateActivityRequest, NewActivity, UpdateActivityRequest,
    },
    db::repositories::{activities::ActivitiesRepo, users::UsersRepo},
    error::AppError,
    services::users_service::UsersService,
    validation::activity::{validate_create_activity, validate_update_activity},
};

pub struct ActivitiesService;

impl ActivitiesService {
    pub fn create(
        conn: &mut PgConnection,
        req: &CreateActivityRequest,
    ) -> Result<ActivityInfo, AppError> {
        validate_create_activity(req.duration_minutes, req.calories_burned, req.distance_km)?;

        if UsersRepo::find_by_id(conn, req.user_id)?.is_none() {
            return Err(AppError::validation(
                "user_id does not reference an existing user",
            ));
        }

        let new_activity = NewActivity {
            user_id: req.user_id,
            activity_type: req.activity_type.clone(),
            duration_minutes: req.duration_minutes,
            calories_burned: req.calories_burned,
            distance_km: req.distance_km,
            description: req.description.clone().unwrap_or_default(),
        };

        let created = ActivitiesRepo::insert(conn, &new_activity)?;
        Self::info_for(conn, created)
    }

    pub fn list_infos(conn: &mut PgConnection) -> Result<Vec<ActivityInfo>, AppError> {
        let activities = ActivitiesRepo::list(conn)?;
        activities
            .into_iter()
            .map(|activity| Self::info_for(conn, activity))
            .collect()
    }

    pub fn get_info(conn: &mut PgConnection, activity_id: Uuid) -> Result<ActivityInfo, AppError> {
        let activity = ActivitiesRepo::find_by_id(conn, activity_id)?
            .ok_or_else(|| AppError::not_found("Activity"))?;
        Self::info_for(conn, activity)
    }

    pub fn update(
        conn: &mut PgConnection,
        activity_id: Uuid,
        req: &UpdateActivityRequest,
    ) -> Result<ActivityInfo, AppError> {
        validate_update_activity(req)?;

        if ActivitiesRepo::find_by_id(conn, activity_id)?.is_none() {
            return Err(AppError::not_found("Activity"));
        }

        let updated = ActivitiesRepo::update_fields(
            conn,
            activity_id,
            req.activity_type.as_ref(),
            req.duration_minutes,
            req.calories_burned,
            req.distance_km,
            req.description.as_deref(),
        )?;
        Self::info_for(conn, updated)
    }

    pub fn delete(conn: &mut PgConnection, activity_id: Uuid) -> Result<(), AppError> {
        let deleted = ActivitiesRepo::delete_by_id(conn, activity_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Activity"));
        }
        Ok(())
    }

    // Leaderboard totals are NOT recomputed here; they go stale until the
    // next full recomputation pass
    pub fn info_for(conn: &mut PgConnection, activity: Activity) -> Result<ActivityInfo, AppError> {
        let user = UsersRepo::find_by_id(conn, activity.user_id)?
            .ok_or_else(|| AppError::internal("Activity owner missing"))?;
        let user_info = UsersService::info_for(conn, user)?;
        Ok(ActivityInfo::from_activity(activity, user_info))
    }
}

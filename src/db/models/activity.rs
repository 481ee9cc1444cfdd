use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::enums::ActivityType;
use crate::db::models::user::UserInfo;

// Activity models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub distance_km: Option<f64>,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::activities)]
pub struct NewActivity {
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub distance_km: Option<f64>,
    pub description: String,
}

// Activity API DTOs
#[derive(Serialize, Deserialize, Clone)]
pub struct ActivityInfo {
    pub id: Uuid,
    pub user: UserInfo,
    pub activity_type: ActivityType,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub distance_km: Option<f64>,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ActivityInfo {
    pub fn from_activity(activity: Activity, user: UserInfo) -> Self {
        Self {
            id: activity.id,
            user,
            activity_type: activity.activity_type,
            duration_minutes: activity.duration_minutes,
            calories_burned: activity.calories_burned,
            distance_km: activity.distance_km,
            description: activity.description,
            created_at: activity.created_at,
            updated_at: activity.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateActivityRequest {
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub distance_km: Option<f64>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateActivityRequest {
    pub activity_type: Option<ActivityType>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub distance_km: Option<f64>,
    pub description: Option<String>,
}

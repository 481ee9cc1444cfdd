use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::models::team::TeamInfo;
use crate::db::models::user::UserInfo;

// Leaderboard models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::leaderboard)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub team_id: Option<Uuid>,
    pub total_points: i32,
    pub total_activities: i32,
    pub total_calories: i32,
    pub rank: i32,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leaderboard)]
pub struct NewLeaderboardEntry {
    pub user_id: Uuid,
    pub team_id: Option<Uuid>,
    pub total_points: i32,
    pub total_activities: i32,
    pub total_calories: i32,
    pub rank: i32,
}

// Leaderboard API DTOs
#[derive(Serialize, Deserialize, Clone)]
pub struct LeaderboardEntryInfo {
    pub id: Uuid,
    pub user: UserInfo,
    pub team: Option<TeamInfo>,
    pub total_points: i32,
    pub total_activities: i32,
    pub total_calories: i32,
    pub rank: i32,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl LeaderboardEntryInfo {
    pub fn from_entry(entry: LeaderboardEntry, user: UserInfo, team: Option<TeamInfo>) -> Self {
        Self {
            id: entry.id,
            user,
            team,
            total_points: entry.total_points,
            total_activities: entry.total_activities,
            total_calories: entry.total_calories,
            rank: entry.rank,
            updated_at: entry.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateLeaderboardEntryRequest {
    pub user_id: Uuid,
    pub team_id: Option<Uuid>,
    pub total_points: Option<i32>,
    pub total_activities: Option<i32>,
    pub total_calories: Option<i32>,
    pub rank: i32,
}

#[derive(Deserialize)]
pub struct UpdateLeaderboardEntryRequest {
    pub team_id: Option<Uuid>,
    pub total_points: Option<i32>,
    pub total_activities: Option<i32>,
    pub total_calories: Option<i32>,
    pub rank: Option<i32>,
}

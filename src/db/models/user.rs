use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::models::team::TeamInfo;
use crate::validation::rules::validate_username_format;

// User models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub team_id: Option<Uuid>,
    pub points: i32,
    pub rank: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub team_id: Option<Uuid>,
    pub points: i32,
    pub rank: i32,
}

// User API DTOs
#[derive(Serialize, Deserialize, Clone)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub team: Option<TeamInfo>,
    pub points: i32,
    pub rank: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl UserInfo {
    pub fn from_user(user: User, team: Option<TeamInfo>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            team,
            points: user.points,
            rank: user.rank,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(custom(function = "validate_username_format"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub team_id: Option<Uuid>,
    pub points: Option<i32>,
    pub rank: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub team_id: Option<Uuid>,
    pub points: Option<i32>,
    pub rank: Option<i32>,
}

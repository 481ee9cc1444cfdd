use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::api::error_codes,
    db::models::user::{CreateUserRequest, NewUser, UpdateUserRequest, User, UserInfo},
    db::repositories::{teams::TeamsRepo, users::UsersRepo},
    error::AppError,
    services::teams_service::TeamsService,
    validation::user::{validate_email, validate_update_user},
};

// Marker stored for accounts created without a usable password
const UNUSABLE_PASSWORD: &str = "!";

pub struct UsersService;

impl UsersService {
    pub fn create(
        conn: &mut PgConnection,
        req: &CreateUserRequest,
        bcrypt_cost: u32,
    ) -> Result<UserInfo, AppError> {
        validate_email(&req.email)?;

        if UsersRepo::exists_username(conn, &req.username)? {
            return Err(AppError::conflict_with_code(
                "Username already exists",
                Some("username".into()),
                error_codes::USER_USERNAME_EXISTS,
            ));
        }
        if UsersRepo::exists_email(conn, &req.email)? {
            return Err(AppError::conflict_with_code(
                "Email already exists",
                Some("email".into()),
                error_codes::USER_EMAIL_EXISTS,
            ));
        }
        if let Some(team_id) = req.team_id {
            if TeamsRepo::find_by_id(conn, team_id)?.is_none() {
                return Err(AppError::validation(
                    "team_id does not reference an existing team",
                ));
            }
        }

        let password_hash = match &req.password {
            Some(password) => bcrypt::hash(password, bcrypt_cost)?,
            None => UNUSABLE_PASSWORD.to_string(),
        };

        let new_user = NewUser {
            username: req.username.clone(),
            email: req.email.clone(),
            first_name: req.first_name.clone().unwrap_or_default(),
            last_name: req.last_name.clone().unwrap_or_default(),
            password_hash,
            team_id: req.team_id,
            points: req.points.unwrap_or(0),
            rank: req.rank.unwrap_or(0),
        };

        let created = UsersRepo::insert(conn, &new_user)?;
        Self::info_for(conn, created)
    }

    pub fn list_infos(conn: &mut PgConnection) -> Result<Vec<UserInfo>, AppError> {
        let users = UsersRepo::list(conn)?;
        users
            .into_iter()
            .map(|user| Self::info_for(conn, user))
            .collect()
    }

    pub fn get_info(conn: &mut PgConnection, user_id: Uuid) -> Result<UserInfo, AppError> {
        let user = UsersRepo::find_by_id(conn, user_id)?.ok_or_else(|| AppError::not_found("User"))?;
        Self::info_for(conn, user)
    }

    pub fn update(
        conn: &mut PgConnection,
        user_id: Uuid,
        req: &UpdateUserRequest,
        bcrypt_cost: u32,
    ) -> Result<UserInfo, AppError> {
        validate_update_user(req)?;

        let existing =
            UsersRepo::find_by_id(conn, user_id)?.ok_or_else(|| AppError::not_found("User"))?;

        if let Some(username) = &req.username {
            if *username != existing.username && UsersRepo::exists_username(conn, username)? {
                return Err(AppError::conflict_with_code(
                    "Username already exists",
                    Some("username".into()),
                    error_codes::USER_USERNAME_EXISTS,
                ));
            }
        }
        if let Some(email) = &req.email {
            if *email != existing.email && UsersRepo::exists_email(conn, email)? {
                return Err(AppError::conflict_with_code(
                    "Email already exists",
                    Some("email".into()),
                    error_codes::USER_EMAIL_EXISTS,
                ));
            }
        }
        if let Some(team_id) = req.team_id {
            if TeamsRepo::find_by_id(conn, team_id)?.is_none() {
                return Err(AppError::validation(
                    "team_id does not reference an existing team",
                ));
            }
        }

        let password_hash = match &req.password {
            Some(password) => Some(bcrypt::hash(password, bcrypt_cost)?),
            None => None,
        };

        let updated = UsersRepo::update_fields(
            conn,
            user_id,
            req.username.as_deref(),
            req.email.as_deref(),
            req.first_name.as_deref(),
            req.last_name.as_deref(),
            password_hash.as_deref(),
            req.team_id,
            req.points,
            req.rank,
        )?;
        Self::info_for(conn, updated)
    }

    pub fn delete(conn: &mut PgConnection, user_id: Uuid) -> Result<(), AppError> {
        let deleted = UsersRepo::delete_by_id(conn, user_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("User"));
        }
        Ok(())
    }

    pub fn info_for(conn: &mut PgConnection, user: User) -> Result<UserInfo, AppError> {
        let team = match user.team_id {
            Some(team_id) => match TeamsRepo::find_by_id(conn, team_id)? {
                Some(team) => Some(TeamsService::info_for(conn, team)?),
                None => None,
            },
            None => None,
        };
        Ok(UserInfo::from_user(user, team))
    }
}

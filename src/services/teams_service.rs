use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::api::error_codes,
    db::models::team::{CreateTeamRequest, NewTeam, Team, TeamInfo, UpdateTeamRequest},
    db::repositories::teams::TeamsRepo,
    error::AppError,
    validation::team::{validate_create_team, validate_update_team},
};

pub struct TeamsService;

impl TeamsService {
    pub fn create(conn: &mut PgConnection, req: &CreateTeamRequest) -> Result<TeamInfo, AppError> {
        validate_create_team(&req.name)?;
        if TeamsRepo::exists_name(conn, &req.name)? {
            return Err(AppError::conflict_with_code(
                "Team name already exists",
                Some("name".into()),
                error_codes::TEAM_NAME_EXISTS,
            ));
        }

        let new_team = NewTeam {
            name: req.name.clone(),
            description: req.description.clone().unwrap_or_default(),
        };

        let created = TeamsRepo::insert(conn, &new_team)?;
        Self::info_for(conn, created)
    }

    pub fn list_infos(conn: &mut PgConnection) -> Result<Vec<TeamInfo>, AppError> {
        let teams = TeamsRepo::list(conn)?;
        teams
            .into_iter()
            .map(|team| Self::info_for(conn, team))
            .collect()
    }

    pub fn get_info(conn: &mut PgConnection, team_id: Uuid) -> Result<TeamInfo, AppError> {
        let team = TeamsRepo::find_by_id(conn, team_id)?.ok_or_else(|| AppError::not_found("Team"))?;
        Self::info_for(conn, team)
    }

    pub fn update(
        conn: &mut PgConnection,
        team_id: Uuid,
        req: &UpdateTeamRequest,
    ) -> Result<TeamInfo, AppError> {
        validate_update_team(&req.name, &req.description)?;

        let existing =
            TeamsRepo::find_by_id(conn, team_id)?.ok_or_else(|| AppError::not_found("Team"))?;

        if let Some(name) = &req.name {
            if *name != existing.name && TeamsRepo::exists_name(conn, name)? {
                return Err(AppError::conflict_with_code(
                    "Team name already exists",
                    Some("name".into()),
                    error_codes::TEAM_NAME_EXISTS,
                ));
            }
        }

        let updated = TeamsRepo::update_fields(
            conn,
            team_id,
            req.name.as_deref(),
            req.description.as_deref(),
        )?;
        Self::info_for(conn, updated)
    }

    pub fn delete(conn: &mut PgConnection, team_id: Uuid) -> Result<(), AppError> {
        let deleted = TeamsRepo::delete_by_id(conn, team_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Team"));
        }
        Ok(())
    }

    pub fn info_for(conn: &mut PgConnection, team: Team) -> Result<TeamInfo, AppError> {
        let member_count = TeamsRepo::member_count(conn, team.id)?;
        Ok(TeamInfo::from_team(team, member_count))
    }
}

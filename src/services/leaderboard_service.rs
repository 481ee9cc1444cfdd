use std::collections::HashMap;

use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::api::error_codes,
    db::models::leaderboard::{
        CreateLeaderboardEntryRequest, LeaderboardEntry, LeaderboardEntryInfo,
        NewLeaderboardEntry, UpdateLeaderboardEntryRequest,
    },
    db::repositories::{
        activities::ActivitiesRepo, leaderboard::LeaderboardRepo, teams::TeamsRepo,
        users::UsersRepo,
    },
    error::AppError,
    services::{teams_service::TeamsService, users_service::UsersService},
    validation::leaderboard::{validate_rank, validate_totals, validate_update_entry},
};

/// Per-user aggregates feeding the ranking step.
pub struct UserTotals {
    pub user_id: Uuid,
    pub team_id: Option<Uuid>,
    pub total_activities: i32,
    pub total_calories: i32,
}

pub struct LeaderboardService;

impl LeaderboardService {
    /// Order totals by calories burned (descending) and assign 1-based ranks
    /// with no gaps. Equal totals fall back to ascending user id so repeated
    /// runs over the same data produce identical rows.
    ///
    /// Points are filled from the same calorie sum; the two columns carry the
    /// same quantity.
    pub fn rank_totals(mut totals: Vec<UserTotals>) -> Vec<NewLeaderboardEntry> {
        totals.sort_by(|a, b| {
            b.total_calories
                .cmp(&a.total_calories)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        totals
            .into_iter()
            .enumerate()
            .map(|(position, totals)| NewLeaderboardEntry {
                user_id: totals.user_id,
                team_id: totals.team_id,
                total_points: totals.total_calories,
                total_activities: totals.total_activities,
                total_calories: totals.total_calories,
                rank: position as i32 + 1,
            })
            .collect()
    }

    /// Full recomputation pass: derive one row per user from the complete
    /// activity set and replace every existing leaderboard row. This is the
    /// only place the leaderboard invariant is restored; routine CRUD leaves
    /// it stale.
    pub fn recompute(conn: &mut PgConnection) -> Result<Vec<LeaderboardEntry>, AppError> {
        let users = UsersRepo::id_team_pairs(conn)?;
        let pairs = ActivitiesRepo::user_calorie_pairs(conn)?;

        let mut aggregates: HashMap<Uuid, (i32, i32)> = HashMap::new();
        for (user_id, burned) in pairs {
            let entry = aggregates.entry(user_id).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += burned;
        }

        let totals = users
            .into_iter()
            .map(|(user_id, team_id)| {
                let (count, burned) = aggregates.get(&user_id).copied().unwrap_or((0, 0));
                UserTotals {
                    user_id,
                    team_id,
                    total_activities: count,
                    total_calories: burned,
                }
            })
            .collect();

        let ranked = Self::rank_totals(totals);
        let entries = LeaderboardRepo::replace_all(conn, &ranked)?;
        Ok(entries)
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &CreateLeaderboardEntryRequest,
    ) -> Result<LeaderboardEntryInfo, AppError> {
        validate_rank(req.rank)?;
        validate_totals(req.total_points, req.total_activities, req.total_calories)?;

        if UsersRepo::find_by_id(conn, req.user_id)?.is_none() {
            return Err(AppError::validation(
                "user_id does not reference an existing user",
            ));
        }
        if LeaderboardRepo::exists_for_user(conn, req.user_id)? {
            return Err(AppError::conflict_with_code(
                "Leaderboard entry already exists for this user",
                Some("user_id".into()),
                error_codes::LEADERBOARD_ENTRY_EXISTS,
            ));
        }
        if let Some(team_id) = req.team_id {
            if TeamsRepo::find_by_id(conn, team_id)?.is_none() {
                return Err(AppError::validation(
                    "team_id does not reference an existing team",
                ));
            }
        }

        let new_entry = NewLeaderboardEntry {
            user_id: req.user_id,
            team_id: req.team_id,
            total_points: req.total_points.unwrap_or(0),
            total_activities: req.total_activities.unwrap_or(0),
            total_calories: req.total_calories.unwrap_or(0),
            rank: req.rank,
        };

        let created = LeaderboardRepo::insert(conn, &new_entry)?;
        Self::info_for(conn, created)
    }

    pub fn list_infos(conn: &mut PgConnection) -> Result<Vec<LeaderboardEntryInfo>, AppError> {
        let entries = LeaderboardRepo::list_ranked(conn)?;
        entries
            .into_iter()
            .map(|entry| Self::info_for(conn, entry))
            .collect()
    }

    pub fn get_info(conn: &mut PgConnection, entry_id: Uuid) -> Result<LeaderboardEntryInfo, AppError> {
        let entry = LeaderboardRepo::find_by_id(conn, entry_id)?
            .ok_or_else(|| AppError::not_found("Leaderboard entry"))?;
        Self::info_for(conn, entry)
    }

    pub fn update(
        conn: &mut PgConnection,
        entry_id: Uuid,
        req: &UpdateLeaderboardEntryRequest,
    ) -> Result<LeaderboardEntryInfo, AppError> {
        validate_update_entry(req)?;

        if LeaderboardRepo::find_by_id(conn, entry_id)?.is_none() {
            return Err(AppError::not_found("Leaderboard entry"));
        }
        if let Some(team_id) = req.team_id {
            if TeamsRepo::find_by_id(conn, team_id)?.is_none() {
                return Err(AppError::validation(
                    "team_id does not reference an existing team",
                ));
            }
        }

        let updated = LeaderboardRepo::update_fields(
            conn,
            entry_id,
            req.team_id,
            req.total_points,
            req.total_activities,
            req.total_calories,
            req.rank,
        )?;
        Self::info_for(conn, updated)
    }

    pub fn delete(conn: &mut PgConnection, entry_id: Uuid) -> Result<(), AppError> {
        let deleted = LeaderboardRepo::delete_by_id(conn, entry_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Leaderboard entry"));
        }
        Ok(())
    }

    pub fn info_for(
        conn: &mut PgConnection,
        entry: LeaderboardEntry,
    ) -> Result<LeaderboardEntryInfo, AppError> {
        let user = UsersRepo::find_by_id(conn, entry.user_id)?
            .ok_or_else(|| AppError::internal("Leaderboard entry owner missing"))?;
        let user_info = UsersService::info_for(conn, user)?;

        let team = match entry.team_id {
            Some(team_id) => match TeamsRepo::find_by_id(conn, team_id)? {
                Some(team) => Some(TeamsService::info_for(conn, team)?),
                None => None,
            },
            None => None,
        };

        Ok(LeaderboardEntryInfo::from_entry(entry, user_info, team))
    }
}

use diesel::prelude::*;

use crate::db::models::leaderboard::{LeaderboardEntry, NewLeaderboardEntry};

pub struct LeaderboardRepo;

impl LeaderboardRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_entry: &NewLeaderboardEntry,
    ) -> Result<LeaderboardEntry, diesel::result::Error> {
        diesel::insert_into(crate::schema::leaderboard::table)
            .values(new_entry)
            .get_result(conn)
    }

    pub fn list_ranked(conn: &mut PgConnection) -> Result<Vec<LeaderboardEntry>, diesel::result::Error> {
        use crate::schema::leaderboard::dsl::*;
        leaderboard.order(rank.asc()).load::<LeaderboardEntry>(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        entry_id: uuid::Uuid,
    ) -> Result<Option<LeaderboardEntry>, diesel::result::Error> {
        use crate::schema::leaderboard::dsl::*;
        leaderboard
            .filter(id.eq(entry_id))
            .first::<LeaderboardEntry>(conn)
            .optional()
    }

    pub fn exists_for_user(conn: &mut PgConnection, user: uuid::Uuid) -> Result<bool, diesel::result::Error> {
        use crate::schema::leaderboard::dsl::*;
        diesel::select(diesel::dsl::exists(leaderboard.filter(user_id.eq(user)))).get_result(conn)
    }

    pub fn count(conn: &mut PgConnection) -> Result<i64, diesel::result::Error> {
        use crate::schema::leaderboard::dsl::*;
        leaderboard.count().get_result(conn)
    }

    // Full replace: the recomputation never patches rows in place
    pub fn replace_all(
        conn: &mut PgConnection,
        entries: &[NewLeaderboardEntry],
    ) -> Result<Vec<LeaderboardEntry>, diesel::result::Error> {
        conn.transaction(|conn| {
            diesel::delete(crate::schema::leaderboard::table).execute(conn)?;
            if entries.is_empty() {
                return Ok(Vec::new());
            }
            diesel::insert_into(crate::schema::leaderboard::table)
                .values(entries)
                .get_results(conn)
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update_fields(
        conn: &mut PgConnection,
        entry_id: uuid::Uuid,
        team_id: Option<uuid::Uuid>,
        total_points: Option<i32>,
        total_activities: Option<i32>,
        total_calories: Option<i32>,
        rank: Option<i32>,
    ) -> Result<LeaderboardEntry, diesel::result::Error> {
        use crate::schema::leaderboard::dsl as l;

        if let Some(team) = team_id {
            diesel::update(l::leaderboard.filter(l::id.eq(entry_id)))
                .set((l::team_id.eq(team), l::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(points) = total_points {
            diesel::update(l::leaderboard.filter(l::id.eq(entry_id)))
                .set((l::total_points.eq(points), l::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(count) = total_activities {
            diesel::update(l::leaderboard.filter(l::id.eq(entry_id)))
                .set((l::total_activities.eq(count), l::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(calories) = total_calories {
            diesel::update(l::leaderboard.filter(l::id.eq(entry_id)))
                .set((l::total_calories.eq(calories), l::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(rank_val) = rank {
            diesel::update(l::leaderboard.filter(l::id.eq(entry_id)))
                .set((l::rank.eq(rank_val), l::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }

        l::leaderboard.filter(l::id.eq(entry_id)).first::<LeaderboardEntry>(conn)
    }

    pub fn delete_by_id(conn: &mut PgConnection, entry_id: uuid::Uuid) -> Result<usize, diesel::result::Error> {
        use crate::schema::leaderboard::dsl::*;
        diesel::delete(leaderboard.filter(id.eq(entry_id))).execute(conn)
    }

    pub fn delete_all(conn: &mut PgConnection) -> Result<usize, diesel::result::Error> {
        diesel::delete(crate::schema::leaderboard::table).execute(conn)
    }
}

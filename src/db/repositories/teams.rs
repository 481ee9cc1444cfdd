use diesel::prelude::*;

use crate::db::models::team::{NewTeam, Team};

pub struct TeamsRepo;

impl TeamsRepo {
    pub fn insert(conn: &mut PgConnection, new_team: &NewTeam) -> Result<Team, diesel::result::Error> {
        diesel::insert_into(crate::schema::teams::table)
            .values(new_team)
            .get_result(conn)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Team>, diesel::result::Error> {
        use crate::schema::teams::dsl::*;
        teams.order(created_at.asc()).load::<Team>(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, team_id: uuid::Uuid) -> Result<Option<Team>, diesel::result::Error> {
        use crate::schema::teams::dsl::*;
        teams.filter(id.eq(team_id)).first::<Team>(conn).optional()
    }

    pub fn exists_name(conn: &mut PgConnection, team_name: &str) -> Result<bool, diesel::result::Error> {
        use crate::schema::teams::dsl::*;
        diesel::select(diesel::dsl::exists(teams.filter(name.eq(team_name)))).get_result(conn)
    }

    pub fn member_count(conn: &mut PgConnection, team: uuid::Uuid) -> Result<i64, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users.filter(team_id.eq(team)).count().get_result(conn)
    }

    pub fn count(conn: &mut PgConnection) -> Result<i64, diesel::result::Error> {
        use crate::schema::teams::dsl::*;
        teams.count().get_result(conn)
    }

    pub fn delete_all(conn: &mut PgConnection) -> Result<usize, diesel::result::Error> {
        diesel::delete(crate::schema::teams::table).execute(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        team_id: uuid::Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Team, diesel::result::Error> {
        use crate::schema::teams::dsl as t;

        if let Some(name_val) = name {
            diesel::update(t::teams.filter(t::id.eq(team_id)))
                .set((t::name.eq(name_val), t::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(desc) = description {
            diesel::update(t::teams.filter(t::id.eq(team_id)))
                .set((t::description.eq(desc), t::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }

        t::teams.filter(t::id.eq(team_id)).first::<Team>(conn)
    }

    // Former members are detached, their leaderboard rows go with the team
    pub fn delete_by_id(conn: &mut PgConnection, team: uuid::Uuid) -> Result<usize, diesel::result::Error> {
        conn.transaction(|conn| {
            diesel::update(
                crate::schema::users::table.filter(crate::schema::users::team_id.eq(team)),
            )
            .set(crate::schema::users::team_id.eq(None::<uuid::Uuid>))
            .execute(conn)?;

            diesel::delete(
                crate::schema::leaderboard::table
                    .filter(crate::schema::leaderboard::team_id.eq(team)),
            )
            .execute(conn)?;

            diesel::delete(
                crate::schema::teams::table.filter(crate::schema::teams::id.eq(team)),
            )
            .execute(conn)
        })
    }
}

use diesel::prelude::*;

use crate::db::models::user::{NewUser, User};

pub struct UsersRepo;

impl UsersRepo {
    pub fn insert(conn: &mut PgConnection, new_user: &NewUser) -> Result<User, diesel::result::Error> {
        diesel::insert_into(crate::schema::users::table)
            .values(new_user)
            .get_result(conn)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users.order(created_at.asc()).load::<User>(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, user_id: uuid::Uuid) -> Result<Option<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users.filter(id.eq(user_id)).first::<User>(conn).optional()
    }

    pub fn exists_username(conn: &mut PgConnection, name: &str) -> Result<bool, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        diesel::select(diesel::dsl::exists(users.filter(username.eq(name)))).get_result(conn)
    }

    pub fn exists_email(conn: &mut PgConnection, addr: &str) -> Result<bool, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        diesel::select(diesel::dsl::exists(users.filter(email.eq(addr)))).get_result(conn)
    }

    pub fn count(conn: &mut PgConnection) -> Result<i64, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users.count().get_result(conn)
    }

    pub fn delete_all(conn: &mut PgConnection) -> Result<usize, diesel::result::Error> {
        diesel::delete(crate::schema::users::table).execute(conn)
    }

    // (id, team_id) pairs for the leaderboard recomputation pass
    pub fn id_team_pairs(
        conn: &mut PgConnection,
    ) -> Result<Vec<(uuid::Uuid, Option<uuid::Uuid>)>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users.order(created_at.asc()).select((id, team_id)).load(conn)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update_fields(
        conn: &mut PgConnection,
        user_id: uuid::Uuid,
        username: Option<&str>,
        email: Option<&str>,
        first_name: Option<&str>,
        last_name: Option<&str>,
        password_hash: Option<&str>,
        team_id: Option<uuid::Uuid>,
        points: Option<i32>,
        rank: Option<i32>,
    ) -> Result<User, diesel::result::Error> {
        use crate::schema::users::dsl as u;

        if let Some(name_val) = username {
            diesel::update(u::users.filter(u::id.eq(user_id)))
                .set((u::username.eq(name_val), u::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(addr) = email {
            diesel::update(u::users.filter(u::id.eq(user_id)))
                .set((u::email.eq(addr), u::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(first) = first_name {
            diesel::update(u::users.filter(u::id.eq(user_id)))
                .set((u::first_name.eq(first), u::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(last) = last_name {
            diesel::update(u::users.filter(u::id.eq(user_id)))
                .set((u::last_name.eq(last), u::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(hash) = password_hash {
            diesel::update(u::users.filter(u::id.eq(user_id)))
                .set((u::password_hash.eq(hash), u::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(team) = team_id {
            diesel::update(u::users.filter(u::id.eq(user_id)))
                .set((u::team_id.eq(team), u::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(points_val) = points {
            diesel::update(u::users.filter(u::id.eq(user_id)))
                .set((u::points.eq(points_val), u::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(rank_val) = rank {
            diesel::update(u::users.filter(u::id.eq(user_id)))
                .set((u::rank.eq(rank_val), u::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }

        u::users.filter(u::id.eq(user_id)).first::<User>(conn)
    }

    // Activities and the leaderboard row are owned by the user
    pub fn delete_by_id(conn: &mut PgConnection, user: uuid::Uuid) -> Result<usize, diesel::result::Error> {
        conn.transaction(|conn| {
            diesel::delete(
                crate::schema::activities::table
                    .filter(crate::schema::activities::user_id.eq(user)),
            )
            .execute(conn)?;

            diesel::delete(
                crate::schema::leaderboard::table
                    .filter(crate::schema::leaderboard::user_id.eq(user)),
            )
            .execute(conn)?;

            diesel::delete(
                crate::schema::users::table.filter(crate::schema::users::id.eq(user)),
            )
            .execute(conn)
        })
    }
}

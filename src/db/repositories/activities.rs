use diesel::prelude::*;

use crate::db::enums::ActivityType;
use crate::db::models::activity::{Activity, NewActivity};

pub struct ActivitiesRepo;

impl ActivitiesRepo {
    pub fn insert(conn: &mut PgConnection, new_activity: &NewActivity) -> Result<Activity, diesel::result::Error> {
        diesel::insert_into(crate::schema::activities::table)
            .values(new_activity)
            .get_result(conn)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Activity>, diesel::result::Error> {
        use crate::schema::activities::dsl::*;
        activities.order(created_at.desc()).load::<Activity>(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, activity_id: uuid::Uuid) -> Result<Option<Activity>, diesel::result::Error> {
        use crate::schema::activities::dsl::*;
        activities
            .filter(id.eq(activity_id))
            .first::<Activity>(conn)
            .optional()
    }

    pub fn count(conn: &mut PgConnection) -> Result<i64, diesel::result::Error> {
        use crate::schema::activities::dsl::*;
        activities.count().get_result(conn)
    }

    // (user_id, calories_burned) pairs for the leaderboard recomputation pass
    pub fn user_calorie_pairs(
        conn: &mut PgConnection,
    ) -> Result<Vec<(uuid::Uuid, i32)>, diesel::result::Error> {
        use crate::schema::activities::dsl::*;
        activities.select((user_id, calories_burned)).load(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        activity_id: uuid::Uuid,
        activity_type: Option<&ActivityType>,
        duration_minutes: Option<i32>,
        calories_burned: Option<i32>,
        distance_km: Option<f64>,
        description: Option<&str>,
    ) -> Result<Activity, diesel::result::Error> {
        use crate::schema::activities::dsl as a;

        if let Some(type_val) = activity_type {
            diesel::update(a::activities.filter(a::id.eq(activity_id)))
                .set((a::activity_type.eq(type_val), a::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(duration) = duration_minutes {
            diesel::update(a::activities.filter(a::id.eq(activity_id)))
                .set((a::duration_minutes.eq(duration), a::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(calories) = calories_burned {
            diesel::update(a::activities.filter(a::id.eq(activity_id)))
                .set((a::calories_burned.eq(calories), a::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(distance) = distance_km {
            diesel::update(a::activities.filter(a::id.eq(activity_id)))
                .set((a::distance_km.eq(distance), a::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(desc) = description {
            diesel::update(a::activities.filter(a::id.eq(activity_id)))
                .set((a::description.eq(desc), a::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }

        a::activities.filter(a::id.eq(activity_id)).first::<Activity>(conn)
    }

    pub fn delete_by_id(conn: &mut PgConnection, activity_id: uuid::Uuid) -> Result<usize, diesel::result::Error> {
        use crate::schema::activities::dsl::*;
        diesel::delete(activities.filter(id.eq(activity_id))).execute(conn)
    }

    pub fn delete_all(conn: &mut PgConnection) -> Result<usize, diesel::result::Error> {
        diesel::delete(crate::schema::activities::table).execute(conn)
    }
}

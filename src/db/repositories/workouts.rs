use diesel::prelude::*;

use crate::db::enums::Difficulty;
use crate::db::models::workout::{NewWorkout, Workout};

pub struct WorkoutsRepo;

impl WorkoutsRepo {
    pub fn insert(conn: &mut PgConnection, new_workout: &NewWorkout) -> Result<Workout, diesel::result::Error> {
        diesel::insert_into(crate::schema::workouts::table)
            .values(new_workout)
            .get_result(conn)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Workout>, diesel::result::Error> {
        use crate::schema::workouts::dsl::*;
        workouts.order(created_at.asc()).load::<Workout>(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, workout_id: uuid::Uuid) -> Result<Option<Workout>, diesel::result::Error> {
        use crate::schema::workouts::dsl::*;
        workouts
            .filter(id.eq(workout_id))
            .first::<Workout>(conn)
            .optional()
    }

    pub fn count(conn: &mut PgConnection) -> Result<i64, diesel::result::Error> {
        use crate::schema::workouts::dsl::*;
        workouts.count().get_result(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        workout_id: uuid::Uuid,
        name: Option<&str>,
        description: Option<&str>,
        difficulty: Option<&Difficulty>,
        duration_minutes: Option<i32>,
        target_calories: Option<i32>,
        exercises: Option<&serde_json::Value>,
    ) -> Result<Workout, diesel::result::Error> {
        use crate::schema::workouts::dsl as w;

        if let Some(name_val) = name {
            diesel::update(w::workouts.filter(w::id.eq(workout_id)))
                .set((w::name.eq(name_val), w::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(desc) = description {
            diesel::update(w::workouts.filter(w::id.eq(workout_id)))
                .set((w::description.eq(desc), w::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(level) = difficulty {
            diesel::update(w::workouts.filter(w::id.eq(workout_id)))
                .set((w::difficulty.eq(level), w::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(duration) = duration_minutes {
            diesel::update(w::workouts.filter(w::id.eq(workout_id)))
                .set((w::duration_minutes.eq(duration), w::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(calories) = target_calories {
            diesel::update(w::workouts.filter(w::id.eq(workout_id)))
                .set((w::target_calories.eq(calories), w::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }
        if let Some(list) = exercises {
            diesel::update(w::workouts.filter(w::id.eq(workout_id)))
                .set((w::exercises.eq(list), w::updated_at.eq(chrono::Utc::now())))
                .execute(conn)?;
        }

        w::workouts.filter(w::id.eq(workout_id)).first::<Workout>(conn)
    }

    pub fn delete_by_id(conn: &mut PgConnection, workout_id: uuid::Uuid) -> Result<usize, diesel::result::Error> {
        use crate::schema::workouts::dsl::*;
        diesel::delete(workouts.filter(id.eq(workout_id))).execute(conn)
    }

    pub fn delete_all(conn: &mut PgConnection) -> Result<usize, diesel::result::Error> {
        diesel::delete(crate::schema::workouts::table).execute(conn)
    }
}

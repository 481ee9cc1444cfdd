use diesel::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::{
    db::enums::{ActivityType, Difficulty},
    db::models::activity::NewActivity,
    db::models::team::NewTeam,
    db::models::user::NewUser,
    db::models::workout::NewWorkout,
    db::repositories::{
        activities::ActivitiesRepo, leaderboard::LeaderboardRepo, teams::TeamsRepo,
        users::UsersRepo, workouts::WorkoutsRepo,
    },
    error::AppError,
    services::leaderboard_service::LeaderboardService,
};

pub const SEED_PASSWORD: &str = "testpass123";
pub const ACTIVITIES_PER_USER: usize = 5;

pub struct SeedTeamSpec {
    pub name: &'static str,
    pub description: &'static str,
}

pub const TEAM_SPECS: [SeedTeamSpec; 2] = [
    SeedTeamSpec {
        name: "Team Marvel",
        description: "Marvel Universe superheroes",
    },
    SeedTeamSpec {
        name: "Team DC",
        description: "DC Universe superheroes",
    },
];

pub struct SeedUserSpec {
    pub username: &'static str,
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
}

// Five heroes per team, first roster belongs to the first team above
pub const ROSTERS: [[SeedUserSpec; 5]; 2] = [
    [
        SeedUserSpec { username: "iron_man", email: "tony@marvel.com", first_name: "Tony", last_name: "Stark" },
        SeedUserSpec { username: "captain_america", email: "steve@marvel.com", first_name: "Steve", last_name: "Rogers" },
        SeedUserSpec { username: "thor", email: "thor@marvel.com", first_name: "Thor", last_name: "Odinson" },
        SeedUserSpec { username: "hulk", email: "bruce@marvel.com", first_name: "Bruce", last_name: "Banner" },
        SeedUserSpec { username: "spider_man", email: "peter@marvel.com", first_name: "Peter", last_name: "Parker" },
    ],
    [
        SeedUserSpec { username: "batman", email: "bruce@dc.com", first_name: "Bruce", last_name: "Wayne" },
        SeedUserSpec { username: "superman", email: "clark@dc.com", first_name: "Clark", last_name: "Kent" },
        SeedUserSpec { username: "wonder_woman", email: "diana@dc.com", first_name: "Diana", last_name: "Prince" },
        SeedUserSpec { username: "flash", email: "barry@dc.com", first_name: "Barry", last_name: "Allen" },
        SeedUserSpec { username: "aquaman", email: "arthur@dc.com", first_name: "Arthur", last_name: "Curry" },
    ],
];

pub struct ActivitySpec {
    pub activity_type: ActivityType,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub distance_km: Option<f64>,
}

/// The fixed five-activity schedule every seeded user gets: types cycle
/// through the six known kinds, durations and calories climb linearly, and
/// only even-indexed sessions carry a distance.
pub fn activity_plan() -> Vec<ActivitySpec> {
    (0..ACTIVITIES_PER_USER)
        .map(|i| ActivitySpec {
            activity_type: ActivityType::ALL[i % ActivityType::ALL.len()].clone(),
            duration_minutes: 30 + (i as i32 * 10),
            calories_burned: 200 + (i as i32 * 50),
            distance_km: if i % 2 == 0 {
                Some(5.0 + i as f64)
            } else {
                None
            },
        })
        .collect()
}

pub fn activity_description(first_name: &str, activity_type: &ActivityType) -> String {
    format!(
        "{} completed a {} activity",
        first_name,
        activity_type.as_str()
    )
}

pub fn workout_catalog() -> Vec<NewWorkout> {
    vec![
        NewWorkout {
            name: "Morning Cardio Blast".to_string(),
            description: "High-intensity cardio workout to start your day".to_string(),
            difficulty: Difficulty::Intermediate,
            duration_minutes: 30,
            target_calories: 250,
            exercises: serde_json::json!(["Jumping Jacks", "High Knees", "Burpees", "Mountain Climbers"]),
        },
        NewWorkout {
            name: "Strength Training Session".to_string(),
            description: "Build muscle with this full-body strength routine".to_string(),
            difficulty: Difficulty::Advanced,
            duration_minutes: 45,
            target_calories: 350,
            exercises: serde_json::json!(["Squats", "Deadlifts", "Bench Press", "Rows"]),
        },
        NewWorkout {
            name: "Beginner Yoga Flow".to_string(),
            description: "Relaxing yoga session perfect for beginners".to_string(),
            difficulty: Difficulty::Beginner,
            duration_minutes: 30,
            target_calories: 100,
            exercises: serde_json::json!(["Child Pose", "Cat-Cow", "Downward Dog", "Warrior Pose"]),
        },
        NewWorkout {
            name: "Evening Run".to_string(),
            description: "Distance running workout for endurance building".to_string(),
            difficulty: Difficulty::Intermediate,
            duration_minutes: 40,
            target_calories: 300,
            exercises: serde_json::json!(["Warm-up", "Steady Pace Running", "Speed Intervals", "Cool Down"]),
        },
        NewWorkout {
            name: "Swimming Lap Session".to_string(),
            description: "Full-body swimming workout using multiple strokes".to_string(),
            difficulty: Difficulty::Advanced,
            duration_minutes: 45,
            target_calories: 400,
            exercises: serde_json::json!(["Freestyle", "Backstroke", "Breaststroke", "Butterfly"]),
        },
    ]
}

#[derive(Serialize, Debug)]
pub struct SeedSummary {
    pub teams: i64,
    pub users: i64,
    pub activities: i64,
    pub leaderboard_entries: i64,
    pub workouts: i64,
}

pub struct SeedService;

impl SeedService {
    /// Destructive reset: wipe every table and recreate the fixture dataset.
    /// Runs as a single transaction; a failure at any step rolls the whole
    /// routine back. Not safe to run against a live-serving database.
    pub fn run(conn: &mut PgConnection, bcrypt_cost: u32) -> Result<SeedSummary, AppError> {
        let password_hash = bcrypt::hash(SEED_PASSWORD, bcrypt_cost)?;

        conn.transaction::<_, AppError, _>(|conn| {
            info!("Clearing existing data");
            ActivitiesRepo::delete_all(conn)?;
            LeaderboardRepo::delete_all(conn)?;
            UsersRepo::delete_all(conn)?;
            TeamsRepo::delete_all(conn)?;
            WorkoutsRepo::delete_all(conn)?;

            info!("Creating teams and rosters");
            for (team_spec, roster) in TEAM_SPECS.iter().zip(ROSTERS.iter()) {
                let team = TeamsRepo::insert(
                    conn,
                    &NewTeam {
                        name: team_spec.name.to_string(),
                        description: team_spec.description.to_string(),
                    },
                )?;

                for user_spec in roster {
                    let user = UsersRepo::insert(
                        conn,
                        &NewUser {
                            username: user_spec.username.to_string(),
                            email: user_spec.email.to_string(),
                            first_name: user_spec.first_name.to_string(),
                            last_name: user_spec.last_name.to_string(),
                            password_hash: password_hash.clone(),
                            team_id: Some(team.id),
                            points: 0,
                            rank: 0,
                        },
                    )?;

                    for spec in activity_plan() {
                        ActivitiesRepo::insert(
                            conn,
                            &NewActivity {
                                user_id: user.id,
                                activity_type: spec.activity_type.clone(),
                                duration_minutes: spec.duration_minutes,
                                calories_burned: spec.calories_burned,
                                distance_km: spec.distance_km,
                                description: activity_description(
                                    user_spec.first_name,
                                    &spec.activity_type,
                                ),
                            },
                        )?;
                    }
                }
            }

            info!("Recomputing leaderboard");
            LeaderboardService::recompute(conn)?;

            info!("Creating workout suggestions");
            for workout in workout_catalog() {
                WorkoutsRepo::insert(conn, &workout)?;
            }

            Ok(SeedSummary {
                teams: TeamsRepo::count(conn)?,
                users: UsersRepo::count(conn)?,
                activities: ActivitiesRepo::count(conn)?,
                leaderboard_entries: LeaderboardRepo::count(conn)?,
                workouts: WorkoutsRepo::count(conn)?,
            })
        })
    }
}

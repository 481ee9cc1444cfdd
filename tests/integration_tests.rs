mod unit;

use diesel::prelude::*;
use fittrack_backend::db::repositories::{
    activities::ActivitiesRepo, leaderboard::LeaderboardRepo, teams::TeamsRepo, users::UsersRepo,
};
use fittrack_backend::services::SeedService;

const BASE_URL: &str = "http://127.0.0.1:8000";
const TEST_BCRYPT_COST: u32 = 4;

fn test_connection() -> PgConnection {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgConnection::establish(&url).expect("Failed to connect to database")
}

#[test]
#[ignore = "requires database"]
fn seed_populates_expected_counts() {
    let mut conn = test_connection();
    let summary = SeedService::run(&mut conn, TEST_BCRYPT_COST).expect("seed failed");

    assert_eq!(summary.teams, 2);
    assert_eq!(summary.users, 10);
    assert_eq!(summary.activities, 50);
    assert_eq!(summary.leaderboard_entries, 10);
    assert_eq!(summary.workouts, 5);

    let entries = LeaderboardRepo::list_ranked(&mut conn).unwrap();
    assert_eq!(entries.len(), 10);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.rank, i as i32 + 1);
        assert_eq!(entry.total_activities, 5);
        assert_eq!(entry.total_calories, 1500);
        assert_eq!(entry.total_points, entry.total_calories);
        assert!(entry.team_id.is_some());
    }
    for pair in entries.windows(2) {
        assert!(pair[0].total_calories >= pair[1].total_calories);
    }
}

#[test]
#[ignore = "requires database"]
fn seed_twice_yields_the_same_dataset() {
    let mut conn = test_connection();
    let first = SeedService::run(&mut conn, TEST_BCRYPT_COST).expect("first seed failed");
    let second = SeedService::run(&mut conn, TEST_BCRYPT_COST).expect("second seed failed");

    assert_eq!(first.teams, second.teams);
    assert_eq!(first.users, second.users);
    assert_eq!(first.activities, second.activities);
    assert_eq!(first.leaderboard_entries, second.leaderboard_entries);
    assert_eq!(first.workouts, second.workouts);

    let entries = LeaderboardRepo::list_ranked(&mut conn).unwrap();
    assert_eq!(entries.len(), 10);
    assert!(entries.iter().all(|e| e.total_calories == 1500));
}

#[test]
#[ignore = "requires database"]
fn seeded_distances_appear_on_even_sessions_only() {
    let mut conn = test_connection();
    SeedService::run(&mut conn, TEST_BCRYPT_COST).expect("seed failed");

    let activities = ActivitiesRepo::list(&mut conn).unwrap();
    assert_eq!(activities.len(), 50);

    let with_distance = activities.iter().filter(|a| a.distance_km.is_some()).count();
    // 3 of every user's 5 sessions (indices 0, 2, 4) carry a distance
    assert_eq!(with_distance, 30);
}

#[test]
#[ignore = "requires database"]
fn deleting_a_team_detaches_members_and_drops_its_leaderboard_rows() {
    let mut conn = test_connection();
    SeedService::run(&mut conn, TEST_BCRYPT_COST).expect("seed failed");

    let team = TeamsRepo::list(&mut conn)
        .unwrap()
        .into_iter()
        .find(|t| t.name == "Team DC")
        .expect("seeded team missing");
    TeamsRepo::delete_by_id(&mut conn, team.id).unwrap();

    let users = UsersRepo::list(&mut conn).unwrap();
    assert_eq!(users.len(), 10);
    let detached = users.iter().filter(|u| u.team_id.is_none()).count();
    assert_eq!(detached, 5);

    assert_eq!(LeaderboardRepo::count(&mut conn).unwrap(), 5);
}

#[test]
#[ignore = "requires database"]
fn deleting_a_user_cascades_to_activities_and_leaderboard() {
    let mut conn = test_connection();
    SeedService::run(&mut conn, TEST_BCRYPT_COST).expect("seed failed");

    let user = UsersRepo::list(&mut conn).unwrap().into_iter().next().unwrap();
    UsersRepo::delete_by_id(&mut conn, user.id).unwrap();

    assert_eq!(UsersRepo::count(&mut conn).unwrap(), 9);
    assert_eq!(ActivitiesRepo::count(&mut conn).unwrap(), 45);
    assert_eq!(LeaderboardRepo::count(&mut conn).unwrap(), 9);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn activity_round_trip_returns_nested_user_and_team() {
    let client = reqwest::Client::new();
    let suffix = uuid::Uuid::new_v4().simple().to_string();

    let resp = client
        .post(format!("{}/teams", BASE_URL))
        .json(&serde_json::json!({
            "name": format!("Round Trip Team {}", suffix),
            "description": "integration test team",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let body: serde_json::Value = resp.json().await.unwrap();
    let team_id = body["data"]["id"].as_str().unwrap().to_string();

    let resp = client
        .post(format!("{}/users", BASE_URL))
        .json(&serde_json::json!({
            "username": format!("round_trip_{}", suffix),
            "email": format!("round_trip_{}@example.com", suffix),
            "first_name": "Round",
            "last_name": "Trip",
            "team_id": team_id,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let body: serde_json::Value = resp.json().await.unwrap();
    let user_id = body["data"]["id"].as_str().unwrap().to_string();

    let resp = client
        .post(format!("{}/activities", BASE_URL))
        .json(&serde_json::json!({
            "user_id": user_id,
            "activity_type": "running",
            "duration_minutes": 30,
            "calories_burned": 200,
            "distance_km": 5.0,
            "description": "integration test run",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let body: serde_json::Value = resp.json().await.unwrap();
    let activity_id = body["data"]["id"].as_str().unwrap().to_string();

    let resp = client
        .get(format!("{}/activities/{}", BASE_URL, activity_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();

    assert_eq!(body["data"]["user"]["id"].as_str().unwrap(), user_id);
    assert_eq!(
        body["data"]["user"]["team"]["id"].as_str().unwrap(),
        team_id
    );
    assert_eq!(body["data"]["activity_type"].as_str().unwrap(), "running");
}

// Fixture-plan tests; the seed arithmetic is pure and checked without a database

use std::collections::HashSet;

use fittrack_backend::db::enums::ActivityType;
use fittrack_backend::services::seed_service::{
    ACTIVITIES_PER_USER, ROSTERS, TEAM_SPECS, activity_description, activity_plan,
    workout_catalog,
};

#[test]
fn plan_has_two_teams_and_five_users_each() {
    assert_eq!(TEAM_SPECS.len(), 2);
    assert_eq!(ROSTERS.len(), 2);
    for roster in &ROSTERS {
        assert_eq!(roster.len(), 5);
    }

    let usernames: HashSet<&str> = ROSTERS.iter().flatten().map(|u| u.username).collect();
    let emails: HashSet<&str> = ROSTERS.iter().flatten().map(|u| u.email).collect();
    assert_eq!(usernames.len(), 10);
    assert_eq!(emails.len(), 10);
}

#[test]
fn activity_plan_follows_the_formula() {
    let plan = activity_plan();
    assert_eq!(plan.len(), ACTIVITIES_PER_USER);

    for (i, spec) in plan.iter().enumerate() {
        assert_eq!(spec.activity_type, ActivityType::ALL[i % 6]);
        assert_eq!(spec.duration_minutes, 30 + (i as i32 * 10));
        assert_eq!(spec.calories_burned, 200 + (i as i32 * 50));
        if i % 2 == 0 {
            assert_eq!(spec.distance_km, Some(5.0 + i as f64));
        } else {
            assert_eq!(spec.distance_km, None);
        }
    }
}

#[test]
fn every_seeded_user_burns_1500_calories() {
    let total: i32 = activity_plan().iter().map(|s| s.calories_burned).sum();
    assert_eq!(total, 1500);
}

#[test]
fn activity_descriptions_name_the_user_and_type() {
    assert_eq!(
        activity_description("Tony", &ActivityType::Running),
        "Tony completed a running activity"
    );
    assert_eq!(
        activity_description("Diana", &ActivityType::Yoga),
        "Diana completed a yoga activity"
    );
}

#[test]
fn workout_catalog_is_fixed() {
    let catalog = workout_catalog();
    assert_eq!(catalog.len(), 5);

    let names: Vec<&str> = catalog.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Morning Cardio Blast",
            "Strength Training Session",
            "Beginner Yoga Flow",
            "Evening Run",
            "Swimming Lap Session",
        ]
    );

    for workout in &catalog {
        assert!(workout.duration_minutes > 0);
        assert!(workout.target_calories > 0);
        let exercises = workout.exercises.as_array().expect("exercises is an array");
        assert_eq!(exercises.len(), 4);
    }
}

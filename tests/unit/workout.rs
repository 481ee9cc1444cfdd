// Validation and enum-mapping tests for workouts

use fittrack_backend::db::enums::Difficulty;
use fittrack_backend::db::models::workout::UpdateWorkoutRequest;
use fittrack_backend::validation::workout::{validate_create_workout, validate_update_workout};

#[test]
fn difficulty_accepts_exactly_three_variants() {
    for name in ["beginner", "intermediate", "advanced"] {
        let parsed: Result<Difficulty, _> = serde_json::from_str(&format!("\"{}\"", name));
        assert_eq!(parsed.unwrap().as_str(), name);
    }

    let parsed: Result<Difficulty, _> = serde_json::from_str("\"expert\"");
    assert!(parsed.is_err());
}

#[test]
fn create_workout_rules() {
    assert!(validate_create_workout("Morning Cardio Blast", 30, 250).is_ok());
    assert!(validate_create_workout("", 30, 250).is_err());
    assert!(validate_create_workout("Blast", 0, 250).is_err());
    assert!(validate_create_workout("Blast", 30, -1).is_err());
}

#[test]
fn update_workout_requires_data() {
    let empty = UpdateWorkoutRequest {
        name: None,
        description: None,
        difficulty: None,
        duration_minutes: None,
        target_calories: None,
        exercises: None,
    };
    assert!(validate_update_workout(&empty).is_err());

    let req = UpdateWorkoutRequest {
        name: None,
        description: None,
        difficulty: Some(Difficulty::Advanced),
        duration_minutes: None,
        target_calories: None,
        exercises: None,
    };
    assert!(validate_update_workout(&req).is_ok());

    let req = UpdateWorkoutRequest {
        name: Some("".to_string()),
        description: None,
        difficulty: None,
        duration_minutes: None,
        target_calories: None,
        exercises: None,
    };
    assert!(validate_update_workout(&req).is_err());
}

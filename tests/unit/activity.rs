// Validation and enum-mapping tests for activities

use fittrack_backend::db::enums::ActivityType;
use fittrack_backend::db::models::activity::UpdateActivityRequest;
use fittrack_backend::validation::activity::{
    validate_create_activity, validate_update_activity,
};

#[test]
fn activity_type_accepts_exactly_six_variants() {
    for name in ["running", "cycling", "swimming", "strength", "yoga", "cardio"] {
        let parsed: Result<ActivityType, _> = serde_json::from_str(&format!("\"{}\"", name));
        assert_eq!(parsed.unwrap().as_str(), name);
    }

    let parsed: Result<ActivityType, _> = serde_json::from_str("\"skiing\"");
    assert!(parsed.is_err());
}

#[test]
fn activity_type_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ActivityType::Strength).unwrap(),
        "\"strength\""
    );
}

#[test]
fn create_activity_rules() {
    assert!(validate_create_activity(30, 200, Some(5.0)).is_ok());
    assert!(validate_create_activity(30, 200, None).is_ok());
    assert!(validate_create_activity(0, 200, None).is_err());
    assert!(validate_create_activity(-10, 200, None).is_err());
    assert!(validate_create_activity(30, -1, None).is_err());
    assert!(validate_create_activity(30, 200, Some(-0.5)).is_err());
}

#[test]
fn update_activity_requires_data() {
    let empty = UpdateActivityRequest {
        activity_type: None,
        duration_minutes: None,
        calories_burned: None,
        distance_km: None,
        description: None,
    };
    assert!(validate_update_activity(&empty).is_err());

    let req = UpdateActivityRequest {
        activity_type: Some(ActivityType::Yoga),
        duration_minutes: None,
        calories_burned: None,
        distance_km: None,
        description: None,
    };
    assert!(validate_update_activity(&req).is_ok());

    let req = UpdateActivityRequest {
        activity_type: None,
        duration_minutes: Some(0),
        calories_burned: None,
        distance_km: None,
        description: None,
    };
    assert!(validate_update_activity(&req).is_err());
}

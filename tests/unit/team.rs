// Validation-only tests for teams

use fittrack_backend::validation::team::{validate_create_team, validate_update_team};

#[test]
fn validate_team_name() {
    assert!(validate_create_team("Team Marvel").is_ok());
    assert!(validate_create_team("").is_err());
    assert!(validate_create_team("   ").is_err());
    assert!(validate_create_team(&"a".repeat(101)).is_err());
    assert!(validate_create_team(&"a".repeat(100)).is_ok());
}

#[test]
fn validate_team_update_requires_data() {
    assert!(validate_update_team(&None, &None).is_err());
    assert!(validate_update_team(&Some("New Name".to_string()), &None).is_ok());
    assert!(validate_update_team(&None, &Some("New description".to_string())).is_ok());
    assert!(validate_update_team(&Some("".to_string()), &None).is_err());
}

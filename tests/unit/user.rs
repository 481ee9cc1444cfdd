// Validation-only tests for users

use fittrack_backend::db::models::user::UpdateUserRequest;
use fittrack_backend::validation::rules::validate_username_format;
use fittrack_backend::validation::user::{validate_email, validate_update_user};

fn empty_update() -> UpdateUserRequest {
    UpdateUserRequest {
        username: None,
        email: None,
        first_name: None,
        last_name: None,
        password: None,
        team_id: None,
        points: None,
        rank: None,
    }
}

#[test]
fn username_format_rules() {
    assert!(validate_username_format("iron_man").is_ok());
    assert!(validate_username_format("wonder-woman2").is_ok());
    assert!(validate_username_format("").is_err());
    assert!(validate_username_format("bad user").is_err());
    assert!(validate_username_format("bad@user").is_err());
}

#[test]
fn email_rules() {
    assert!(validate_email("tony@marvel.com").is_ok());
    assert!(validate_email("").is_err());
    assert!(validate_email("not-an-email").is_err());
}

#[test]
fn update_requires_data() {
    assert!(validate_update_user(&empty_update()).is_err());

    let mut req = empty_update();
    req.points = Some(1500);
    assert!(validate_update_user(&req).is_ok());

    let mut req = empty_update();
    req.email = Some("bad".to_string());
    assert!(validate_update_user(&req).is_err());

    let mut req = empty_update();
    req.username = Some("  ".to_string());
    assert!(validate_update_user(&req).is_err());
}

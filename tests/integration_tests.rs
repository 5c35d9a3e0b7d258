//! Integration tests for the group_creator library
//!
//! These tests verify the public API and module interactions.

mod commands;

use group_creator::{
    config::{Config, FILLER_MESSAGE_COUNT, GROUP_ABOUT, LOCK_FILE, SESSION_NAME},
    error::{Error, Result},
    input,
    provision::{group_title, notification_text, CreatedGroup, ProvisionPlan},
    words,
};

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_new_loads_or_defaults() {
    let config = Config::new();
    assert!(!config.session_name.is_empty());
    assert!(!config.lock_file.is_empty());
}

#[test]
fn test_config_constants() {
    assert_eq!(SESSION_NAME, "group_creator");
    assert_eq!(LOCK_FILE, "group_creator.session.lock");
    assert_eq!(FILLER_MESSAGE_COUNT, 10);
    assert_eq!(GROUP_ABOUT, "Group created via script.");
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_error_variants_display() {
    let errors = vec![
        Error::SessionNotFound("test.session".into()),
        Error::SessionLocked,
        Error::LockError("lock failed".into()),
        Error::TelegramError("api error".into()),
        Error::PeerNotFound("peer123".into()),
        Error::InvalidArgument("bad arg".into()),
        Error::InputClosed,
    ];

    for err in errors {
        let msg = err.to_string();
        assert!(!msg.is_empty(), "Error message should not be empty");
    }
}

#[test]
fn test_result_type_alias() {
    fn returns_ok() -> Result<i32> {
        Ok(42)
    }

    fn returns_err() -> Result<i32> {
        Err(Error::InputClosed)
    }

    assert_eq!(returns_ok().unwrap(), 42);
    assert!(returns_err().is_err());
}

// ============================================================================
// Naming & Notification Tests
// ============================================================================

#[test]
fn test_group_naming_scheme() {
    for i in 1..=5 {
        assert_eq!(group_title("MyGroup", i), format!("MyGroup {}", i));
    }
}

#[test]
fn test_notification_mentions_group_and_link() {
    let group = CreatedGroup {
        id: 42,
        title: "Test 1".into(),
        invite_link: Some("https://t.me/+xyz".into()),
    };
    let text = notification_text(&group, "2025-06-01 10:00:00");

    assert!(text.contains("Test 1"));
    assert!(text.contains("42"));
    assert!(text.contains("https://t.me/+xyz"));
}

#[test]
fn test_provision_plan_is_constructible() {
    let plan = ProvisionPlan {
        count: 3,
        base_name: "MyGroup".into(),
        delay_between_groups: std::time::Duration::from_secs(1),
        delay_after_adding: std::time::Duration::ZERO,
    };
    assert_eq!(plan.count, 3);
    assert_eq!(plan.base_name, "MyGroup");
}

// ============================================================================
// Input & Words Tests
// ============================================================================

#[test]
fn test_input_validation_through_public_api() {
    assert_eq!(input::parse_positive_count("5"), Some(5));
    assert_eq!(input::parse_positive_count("0"), None);
    assert_eq!(input::parse_positive_count("five"), None);

    assert_eq!(input::parse_delay_secs("0"), Some(0.0));
    assert_eq!(input::parse_delay_secs("2.5"), Some(2.5));
    assert_eq!(input::parse_delay_secs("-1"), None);
}

#[test]
fn test_member_list_splitting() {
    let members = input::split_member_list("@a, @b,,  ,+1555");
    assert_eq!(members, vec!["@a", "@b", "+1555"]);
}

#[test]
fn test_word_list_covers_filler_count() {
    assert!(words::RANDOM_WORDS.len() >= FILLER_MESSAGE_COUNT);
}

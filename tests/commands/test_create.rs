//! Tests for the create command's building blocks.

use group_creator::peers::{classify_target, TargetKind};
use group_creator::provision::group_title;

#[test]
fn destination_peer_inputs_classify_correctly() {
    assert_eq!(classify_target("@logs"), TargetKind::Username("logs"));
    assert_eq!(classify_target("777000"), TargetKind::Id(777000));
    assert_eq!(classify_target("+15550100"), TargetKind::Phone("+15550100"));
}

#[test]
fn member_entries_without_at_sign_are_usernames() {
    assert_eq!(classify_target("alice"), TargetKind::Username("alice"));
}

#[test]
fn titles_follow_the_base_name() {
    assert_eq!(group_title("Launch", 1), "Launch 1");
    assert_eq!(group_title("Launch", 10), "Launch 10");
}

#[tokio::test]
#[ignore] // Requires user interaction and a live session
async fn test_create_run() {
    use group_creator::commands::create;

    let _ = create::run().await;
}

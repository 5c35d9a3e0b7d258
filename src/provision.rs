//! Group provisioning and filler messaging loops.
//!
//! The loops are written against [`GroupActions`] so their error policy is
//! testable without a network: group creation is fail-fast, every other
//! step is best-effort and only logged.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::time::sleep;
use tracing::warn;

use crate::error::Result;
use crate::words;

/// A group created during the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedGroup {
    pub id: i64,
    pub title: String,
    pub invite_link: Option<String>,
}

/// Parameters collected for one provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionPlan {
    pub count: usize,
    pub base_name: String,
    pub delay_between_groups: Duration,
    pub delay_after_adding: Duration,
}

/// The remote operations the provisioning loops need.
///
/// The grammers-backed implementation lives in `groups.rs`; tests use an
/// in-process double.
#[async_trait]
pub trait GroupActions {
    async fn create_group(&mut self, title: &str) -> Result<CreatedGroup>;
    async fn make_history_visible(&mut self, group: &CreatedGroup) -> Result<()>;
    async fn invite_members(&mut self, group: &CreatedGroup) -> Result<usize>;
    async fn export_invite_link(&mut self, group: &CreatedGroup) -> Result<String>;
    async fn notify_log_peer(&mut self, text: &str) -> Result<()>;
    async fn send_group_message(&mut self, group: &CreatedGroup, text: &str) -> Result<()>;

    /// Whether a member set was collected for this run.
    fn has_members(&self) -> bool;
}

/// Title for the i-th group (1-based).
pub fn group_title(base_name: &str, index: usize) -> String {
    format!("{} {}", base_name, index)
}

/// Notification posted to the logging peer after each creation.
pub fn notification_text(group: &CreatedGroup, timestamp: &str) -> String {
    format!(
        "**New Group Created**\n\
         **Name:** `{}`\n\
         **Group ID:** `{}`\n\
         **Invite Link:** {}\n\
         **Date:** {}",
        group.title,
        group.id,
        group.invite_link.as_deref().unwrap_or("not available"),
        timestamp
    )
}

fn is_privacy_restricted(err: &crate::error::Error) -> bool {
    err.to_string().contains("USER_PRIVACY_RESTRICTED")
}

/// Create `plan.count` groups sequentially.
///
/// Creation failure stops the loop; already-created groups are returned so
/// the messaging phase can still run over them. Visibility, invitation,
/// invite-link, and notification failures are warnings only.
pub async fn provision_groups<A: GroupActions>(api: &mut A, plan: &ProvisionPlan) -> Vec<CreatedGroup> {
    let mut created: Vec<CreatedGroup> = Vec::new();

    for i in 1..=plan.count {
        let title = group_title(&plan.base_name, i);
        println!("Creating group '{}'...", title);

        let mut group = match api.create_group(&title).await {
            Ok(group) => group,
            Err(e) => {
                eprintln!("Error creating group '{}': {}", title, e);
                break;
            }
        };
        println!("  > Group created with ID: {}", group.id);

        if let Err(e) = api.make_history_visible(&group).await {
            warn!("Could not make history visible for '{}': {}", title, e);
        }

        if api.has_members() {
            match api.invite_members(&group).await {
                Ok(count) => println!("  > {} members added.", count),
                Err(e) if is_privacy_restricted(&e) => {
                    warn!("Could not add members to '{}' due to privacy settings", title);
                }
                Err(e) => warn!("Error adding members to '{}': {}", title, e),
            }

            println!(
                "  > Waiting {:.1} sec after adding members...",
                plan.delay_after_adding.as_secs_f64()
            );
            sleep(plan.delay_after_adding).await;
        }

        match api.export_invite_link(&group).await {
            Ok(link) => {
                println!("  > Invite link: {}", link);
                group.invite_link = Some(link);
            }
            Err(e) => warn!("Could not export invite link for '{}': {}", title, e),
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let note = notification_text(&group, &timestamp);
        match api.notify_log_peer(&note).await {
            Ok(()) => println!("  > Log message sent."),
            Err(e) => warn!("Could not send log message for '{}': {}", title, e),
        }

        created.push(group);

        if i < plan.count {
            println!(
                "Waiting {:.1} sec before the next group...",
                plan.delay_between_groups.as_secs_f64()
            );
            sleep(plan.delay_between_groups).await;
        }
    }

    created
}

/// Send `words_per_group` random words into each created group.
///
/// A failed send skips the rest of that group; remaining groups are still
/// processed.
pub async fn send_filler_messages<A: GroupActions, R: Rng + ?Sized>(
    api: &mut A,
    groups: &[CreatedGroup],
    words_per_group: usize,
    delay_between_messages: Duration,
    rng: &mut R,
) {
    for group in groups {
        println!("\nSending to group '{}'", group.title);
        let words = words::sample(rng, words_per_group);

        for (j, word) in words.iter().enumerate() {
            println!("  > Sending word {}/{}: '{}'", j + 1, words_per_group, word);

            if let Err(e) = api.send_group_message(group, word).await {
                warn!("Could not send messages to '{}': {}", group.title, e);
                break;
            }

            if j + 1 < words.len() {
                sleep(delay_between_messages).await;
            }
        }
    }
}

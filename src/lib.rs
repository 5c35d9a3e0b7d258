//! Telegram Group Creator & Messenger Library
//!
//! This library provides tools to:
//! - Log into a Telegram account (existing session, code login, or 2FA)
//! - Create batches of supergroups with a common base name
//! - Invite a resolved member set into each created group
//! - Export invite links and notify a logging peer per group
//! - Send randomized filler messages into the created groups

pub mod config;
pub mod error;
pub mod groups;
pub mod input;
pub mod login;
pub mod peers;
pub mod provision;
pub mod session;
pub mod words;

// Re-export common types
pub use config::{Config, FILLER_MESSAGE_COUNT, GROUP_ABOUT};
pub use error::{Error, Result};
pub use provision::{CreatedGroup, GroupActions, ProvisionPlan};
pub use session::{check_session_exists, get_client, SessionLock};

// Commands module uses re-exported types, so it must be declared after the re-exports
pub mod commands;

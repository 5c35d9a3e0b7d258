//! The full interactive flow: login, collect run parameters, create the
//! groups, then flood them with filler messages.

use std::io::{self, BufRead, Write};

use grammers_client::types::peer::Peer;
use grammers_client::Client;
use tracing::warn;

use crate::config::{Config, FILLER_MESSAGE_COUNT};
use crate::error::Result;
use crate::groups::TelegramGroupActions;
use crate::input;
use crate::login;
use crate::peers;
use crate::provision::{provision_groups, send_filler_messages, ProvisionPlan};
use crate::session::{get_client, get_client_for_init, session_file_exists, SessionLock};

pub async fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();

    println!("--- Telegram Group Creator & Messenger ---");

    // Credentials from config.yml / env, prompted for when missing
    let mut config = Config::new();
    if config.api_id == 0 {
        config.api_id = input::prompt_api_id(&mut reader, &mut out, "Enter your API ID: ")?;
    }
    if config.api_hash.is_empty() {
        config.api_hash = input::prompt_secret("Enter your API HASH")?;
    }

    let _lock = SessionLock::acquire()?;

    println!("Connecting...");
    let client = if session_file_exists() {
        get_client(config.api_id).await?
    } else {
        get_client_for_init(config.api_id).await?
    };

    let phone_hint = if config.phone.is_empty() {
        None
    } else {
        Some(config.phone.as_str())
    };
    login::ensure_authorized(&client, &config.api_hash, phone_hint, &mut reader, &mut out).await?;

    // Run parameters
    let count =
        input::prompt_positive_count(&mut reader, &mut out, "Number of groups to create: ")?;
    let base_name =
        input::prompt_nonempty(&mut reader, &mut out, "Base name for groups (e.g. 'MyGroup'): ")?;

    let log_peer = prompt_log_peer(&client, &mut reader, &mut out).await?;
    let members = prompt_members(&client, &mut reader, &mut out).await?;

    println!("\n--- Configure delays (in seconds) ---");
    let delay_between_groups =
        input::prompt_delay_secs(&mut reader, &mut out, "Delay between creating each group: ")?;
    let delay_after_adding =
        input::prompt_delay_secs(&mut reader, &mut out, "Delay after adding members: ")?;
    let delay_between_messages = input::prompt_delay_secs(
        &mut reader,
        &mut out,
        "Delay between sending each random message: ",
    )?;

    println!("\nStarting process... will create {} groups.", count);

    let plan = ProvisionPlan {
        count,
        base_name,
        delay_between_groups,
        delay_after_adding,
    };
    let mut api = TelegramGroupActions::new(&client, log_peer, members);

    let created = provision_groups(&mut api, &plan).await;

    println!("\n--- Group creation finished ---");

    if created.is_empty() {
        println!("No groups were created, skipping message sending.");
    } else {
        println!(
            "Sending {} random messages to each of the {} groups...",
            FILLER_MESSAGE_COUNT,
            created.len()
        );
        let mut rng = rand::thread_rng();
        send_filler_messages(
            &mut api,
            &created,
            FILLER_MESSAGE_COUNT,
            delay_between_messages,
            &mut rng,
        )
        .await;
    }

    println!("\nDone.");
    Ok(())
}

/// Ask for the logging peer until one resolves.
async fn prompt_log_peer<R: BufRead, W: Write>(
    client: &Client,
    reader: &mut R,
    writer: &mut W,
) -> Result<Peer> {
    loop {
        let raw = input::prompt_nonempty(
            reader,
            writer,
            "Peer to send logs to (username, phone, or ID): ",
        )?;
        match peers::resolve_peer(client, &raw).await {
            Ok(peer) => {
                writeln!(writer, "Logs will go to {}.", peers::peer_display(&peer))?;
                return Ok(peer);
            }
            Err(e) => writeln!(writer, "Could not find peer '{}': {}. Try again.", raw, e)?,
        }
    }
}

/// Optionally collect and resolve the member set.
///
/// Entries that fail to resolve are skipped with a warning; they never
/// abort the run.
async fn prompt_members<R: BufRead, W: Write>(
    client: &Client,
    reader: &mut R,
    writer: &mut W,
) -> Result<Vec<Peer>> {
    let mut members = Vec::new();

    if !input::prompt_yes_no(reader, writer, "Add members to these groups? (y/n): ")? {
        return Ok(members);
    }

    let raw = input::prompt_line(
        reader,
        writer,
        "Member peers (usernames, phones, or IDs), comma separated: ",
    )?;

    writeln!(writer, "Resolving members...")?;
    for entry in input::split_member_list(&raw) {
        match peers::resolve_peer(client, &entry).await {
            Ok(peer) => {
                writeln!(writer, "  > Found: {}", peers::peer_display(&peer))?;
                members.push(peer);
            }
            Err(e) => warn!("Could not resolve member '{}', skipping: {}", entry, e),
        }
    }

    if members.is_empty() {
        writeln!(writer, "No members resolved; groups will be created empty.")?;
    }

    Ok(members)
}

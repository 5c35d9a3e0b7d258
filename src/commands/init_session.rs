//! Explicit session initialization command.
//!
//! The `create` command logs in on first use as well; this exists for
//! setting up the session ahead of time, with a confirmation step since a
//! fresh login can log the account out elsewhere.

use std::io::{self, Write};

use crate::config::Config;
use crate::error::Result;
use crate::input;
use crate::login;
use crate::session::{get_client_for_init, SessionLock};

pub async fn run() -> Result<()> {
    let mut config = Config::new();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════════╗
║  INITIALIZE A NEW TELEGRAM SESSION                            ║
╚═══════════════════════════════════════════════════════════════╝

⚠️  WARNING:
   A fresh login may log the account out on other devices.

   Type 'YES' (uppercase) to continue: "#
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if answer.trim() != "YES" {
        println!("\n❌ Cancelled. No session file was created.");
        return Ok(());
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();

    if config.api_id == 0 {
        config.api_id = input::prompt_api_id(&mut reader, &mut out, "Enter your API ID: ")?;
    }
    if config.api_hash.is_empty() {
        config.api_hash = input::prompt_secret("Enter your API HASH")?;
    }

    let _lock = SessionLock::acquire()?;

    println!("\n🔄 Creating a new session...");
    let client = get_client_for_init(config.api_id).await?;

    let phone_hint = if config.phone.is_empty() {
        None
    } else {
        Some(config.phone.as_str())
    };
    login::ensure_authorized(&client, &config.api_hash, phone_hint, &mut reader, &mut out).await?;

    println!(
        r#"
✅ Session ready.

File: {}.session

You can now run the `create` command; it will reuse this session.
Keep a backup of the session file.
"#,
        config.session_name
    );

    Ok(())
}

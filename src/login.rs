//! Interactive authorization flow.
//!
//! Reuses an authorized session when one exists; otherwise walks the
//! phone → one-time code → (optional) two-factor password sequence.
//! Any unexpected failure here is fatal for the whole run.

use std::io::{BufRead, Write};

use grammers_client::{Client, SignInError};

use crate::error::{Error, Result};
use crate::input;

/// Ensure the client is authorized, prompting for login data when needed.
///
/// `phone_hint` (from config) skips the phone prompt when present.
pub async fn ensure_authorized<R: BufRead, W: Write>(
    client: &Client,
    api_hash: &str,
    phone_hint: Option<&str>,
    reader: &mut R,
    writer: &mut W,
) -> Result<()> {
    let authorized = client
        .is_authorized()
        .await
        .map_err(|e| Error::TelegramError(format!("Failed to check authorization: {}", e)))?;

    if authorized {
        writeln!(writer, "Using existing session.")?;
        return Ok(());
    }

    writeln!(writer, "First-time login.")?;
    let phone = match phone_hint {
        Some(phone) if !phone.trim().is_empty() => phone.trim().to_string(),
        _ => input::prompt_nonempty(reader, writer, "Enter phone (e.g. +1234567890): ")?,
    };

    let token = client
        .request_login_code(&phone, api_hash)
        .await
        .map_err(|e| Error::TelegramError(format!("Failed to request login code: {}", e)))?;

    let code = input::prompt_nonempty(reader, writer, "Enter the code you received: ")?;

    let user = match client.sign_in(&token, &code).await {
        Ok(user) => user,
        Err(SignInError::PasswordRequired(password_token)) => {
            let password = input::prompt_secret("Two-factor password")?;
            client
                .check_password(password_token, password)
                .await
                .map_err(|e| Error::TelegramError(format!("Two-factor check failed: {}", e)))?
        }
        Err(e) => return Err(Error::TelegramError(format!("Failed to sign in: {}", e))),
    };

    writeln!(
        writer,
        "Login successful: {} (@{})",
        user.full_name(),
        user.username().unwrap_or("no username")
    )?;

    Ok(())
}

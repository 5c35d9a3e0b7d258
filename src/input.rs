//! Interactive terminal input with validation retry loops.
//!
//! Every prompt re-asks until the answer parses and satisfies its
//! constraint. The functions are generic over reader/writer so the retry
//! behavior can be tested without a terminal; a closed input stream is the
//! only way out of a loop and surfaces as [`Error::InputClosed`].

use std::io::{BufRead, Write};
use std::time::Duration;

use dialoguer::Password;

use crate::error::{Error, Result};

/// Print a prompt and read one trimmed line.
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        return Err(Error::InputClosed);
    }
    Ok(line.trim().to_string())
}

/// Re-prompt until `parse` accepts the line.
fn prompt_until<R, W, T, F>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    retry_message: &str,
    parse: F,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let line = prompt_line(reader, writer, prompt)?;
        match parse(&line) {
            Some(value) => return Ok(value),
            None => writeln!(writer, "{}", retry_message)?,
        }
    }
}

/// Parse a positive integer (group count).
pub fn parse_positive_count(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

/// Parse a non-negative number of seconds.
pub fn parse_delay_secs(input: &str) -> Option<f64> {
    match input.trim().parse::<f64>() {
        Ok(secs) if secs >= 0.0 && secs.is_finite() => Some(secs),
        _ => None,
    }
}

/// Prompt for a positive integer, retrying on invalid input.
pub fn prompt_positive_count<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<usize> {
    prompt_until(
        reader,
        writer,
        prompt,
        "Invalid input. Please enter a positive number.",
        parse_positive_count,
    )
}

/// Prompt for a positive API ID, retrying on invalid input.
pub fn prompt_api_id<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<i32> {
    prompt_until(
        reader,
        writer,
        prompt,
        "Invalid input. API ID must be a positive number.",
        |line| match line.trim().parse::<i32>() {
            Ok(id) if id > 0 => Some(id),
            _ => None,
        },
    )
}

/// Prompt for a non-negative delay in seconds, retrying on invalid input.
pub fn prompt_delay_secs<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Duration> {
    let secs = prompt_until(
        reader,
        writer,
        prompt,
        "Invalid input. Please enter a non-negative number (e.g. 2.5).",
        parse_delay_secs,
    )?;
    Ok(Duration::from_secs_f64(secs))
}

/// Prompt for a non-empty line, retrying on blank input.
pub fn prompt_nonempty<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String> {
    prompt_until(
        reader,
        writer,
        prompt,
        "A value is required.",
        |line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        },
    )
}

/// Prompt for a yes/no answer, retrying until `y` or `n`.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<bool> {
    prompt_until(
        reader,
        writer,
        prompt,
        "Please answer y or n.",
        |line| match line.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        },
    )
}

/// Split a comma-separated member list, dropping blank entries.
pub fn split_member_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Read a secret without echoing it to the terminal.
pub fn prompt_secret(prompt: &str) -> Result<String> {
    let value = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(false)
        .interact()?;
    Ok(value.trim().to_string())
}

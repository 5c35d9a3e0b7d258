//! Session management for the Telegram client
//!
//! Provides:
//! - File-based session locking to prevent parallel execution
//! - Session file validation
//! - Client creation with proper configuration

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use grammers_client::client::updates::UpdatesLike;
use grammers_client::Client;
use grammers_mtsender::{SenderPool, SenderPoolHandle};
use grammers_session::storages::SqliteSession;
use tokio::sync::mpsc;

use crate::config::{LOCK_FILE, SESSION_NAME};
use crate::error::{Error, Result};

/// Session lock guard that ensures exclusive access to the Telegram session.
pub struct SessionLock {
    lock_file: Option<File>,
    lock_path: PathBuf,
}

impl SessionLock {
    /// Acquire an exclusive lock on the session.
    pub fn acquire() -> Result<Self> {
        Self::acquire_with_base_dir(Path::new("."))
    }

    pub fn acquire_with_base_dir(base_dir: &Path) -> Result<Self> {
        let lock_path = base_dir.join(LOCK_FILE);
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| Error::LockError(format!("Failed to open lock file: {}", e)))?;

        match lock_file.try_lock_exclusive() {
            Ok(()) => Ok(Self {
                lock_file: Some(lock_file),
                lock_path,
            }),
            Err(_) => {
                eprintln!(
                    r#"
⚠️  ERROR: the Telegram session is already in use by another process!

Telegram operations must run sequentially; sharing one session between
two processes leads to conflicts and account locks.

Wait for the other run to finish and try again.
"#
                );
                Err(Error::SessionLocked)
            }
        }
    }

    /// Release the lock manually
    pub fn release(&mut self) {
        if let Some(ref file) = self.lock_file {
            let _ = file.unlock();
        }
        self.lock_file = None;
        let _ = std::fs::remove_file(&self.lock_path);
    }
}

impl Drop for SessionLock {
    fn drop(&mut self) {
        self.release();
    }
}

/// True if the session file already exists in the current directory.
pub fn session_file_exists() -> bool {
    Path::new(&session_file_name()).exists()
}

fn session_file_name() -> String {
    format!("{}.session", SESSION_NAME)
}

/// Check if the session file exists.
pub fn check_session_exists() -> Result<()> {
    check_session_exists_with_base_dir(Path::new("."))
}

/// Check if the session file exists in a specific directory.
pub fn check_session_exists_with_base_dir(base_dir: &Path) -> Result<()> {
    let session_file = base_dir.join(session_file_name());

    if !session_file.exists() {
        eprintln!(
            r#"
⚠️  ERROR: session file '{}' not found!

To create it either:
1. Run: cargo run --bin init_session
2. Or run the `create` command, which logs in on first use
"#,
            session_file.display()
        );
        return Err(Error::SessionNotFound(
            session_file.to_string_lossy().to_string(),
        ));
    }

    Ok(())
}

/// Open the session file, creating it when missing.
pub fn open_session() -> Result<Arc<SqliteSession>> {
    let session = SqliteSession::open(&session_file_name())
        .map_err(|e| Error::SessionNotFound(format!("Failed to open session: {}", e)))?;
    Ok(Arc::new(session))
}

/// Holder for SenderPool components and Client
pub struct TelegramClient {
    pub client: Client,
    pub handle: SenderPoolHandle,
    // Kept so the update channel stays open; nothing here consumes updates.
    _updates: mpsc::UnboundedReceiver<UpdatesLike>,
    _runner_handle: tokio::task::JoinHandle<()>,
}

impl TelegramClient {
    /// Create a new TelegramClient from session
    pub async fn connect(session: Arc<SqliteSession>, api_id: i32) -> Result<Self> {
        let pool = SenderPool::new(session, api_id);

        // Create client from pool (need reference to whole pool)
        let client = Client::new(&pool);

        // Get handle and runner after client is created
        let SenderPool {
            runner,
            updates,
            handle,
        } = pool;

        // Spawn the runner in background
        let runner_handle = tokio::spawn(async move {
            runner.run().await;
        });

        Ok(Self {
            client,
            handle,
            _updates: updates,
            _runner_handle: runner_handle,
        })
    }
}

// Implement Deref to allow using TelegramClient as &Client
impl std::ops::Deref for TelegramClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

/// Create and connect a Telegram client with an existing session.
pub async fn get_client(api_id: i32) -> Result<TelegramClient> {
    check_session_exists()?;
    let session = open_session()?;
    TelegramClient::connect(session, api_id).await
}

/// Create a Telegram client, creating the session file when missing.
pub async fn get_client_for_init(api_id: i32) -> Result<TelegramClient> {
    let session = open_session()?;
    TelegramClient::connect(session, api_id).await
}

//! Error types for the group creator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Session file not found: {0}")]
    SessionNotFound(String),

    #[error("Session is locked by another process")]
    SessionLocked,

    #[error("Failed to acquire session lock: {0}")]
    LockError(String),

    #[error("Telegram API error: {0}")]
    TelegramError(String),

    #[error("Peer not found: {0}")]
    PeerNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<grammers_client::InvocationError> for Error {
    fn from(err: grammers_client::InvocationError) -> Self {
        Error::TelegramError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_session_not_found() {
        let err = Error::SessionNotFound("test.session".to_string());
        assert!(err.to_string().contains("Session file not found"));
        assert!(err.to_string().contains("test.session"));
    }

    #[test]
    fn test_error_display_session_locked() {
        let err = Error::SessionLocked;
        assert!(err.to_string().contains("locked by another process"));
    }

    #[test]
    fn test_error_display_peer_not_found() {
        let err = Error::PeerNotFound("@ghost".to_string());
        assert!(err.to_string().contains("Peer not found"));
        assert!(err.to_string().contains("@ghost"));
    }

    #[test]
    fn test_error_display_telegram_error() {
        let err = Error::TelegramError("flood wait".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Telegram API error"));
        assert!(msg.contains("flood wait"));
    }

    #[test]
    fn test_error_display_invalid_argument() {
        let err = Error::InvalidArgument("missing required field".to_string());
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_error_display_input_closed() {
        let err = Error::InputClosed;
        assert!(err.to_string().contains("Input stream closed"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_from_io_various_kinds() {
        let kinds = [
            std::io::ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied,
            std::io::ErrorKind::ConnectionRefused,
            std::io::ErrorKind::TimedOut,
        ];

        for kind in kinds {
            let io_err = std::io::Error::new(kind, "test");
            let err: Error = io_err.into();
            assert!(matches!(err, Error::IoError(_)));
        }
    }

    #[test]
    fn test_error_debug_impl() {
        let err = Error::SessionLocked;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("SessionLocked"));
    }

    #[test]
    fn test_error_all_variants_display_nonempty() {
        let variants: Vec<Error> = vec![
            Error::SessionNotFound("session".to_string()),
            Error::SessionLocked,
            Error::LockError("lock".to_string()),
            Error::TelegramError("telegram".to_string()),
            Error::PeerNotFound("peer".to_string()),
            Error::InvalidArgument("arg".to_string()),
            Error::InputClosed,
        ];

        for err in variants {
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(Error::InputClosed);
        assert!(result.is_err());
    }
}

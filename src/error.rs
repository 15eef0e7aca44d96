//! Application error type shared by every layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),

    /// Failure reported by a command handler.
    #[error("{0}")]
    Command(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_with_message() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        match err {
            AppError::Io(msg) => assert!(msg.contains("gone")),
            other => panic!("Expected AppError::Io, got: {:?}", other),
        }
    }

    #[test]
    fn serde_error_converts() {
        let parse: std::result::Result<Vec<String>, _> = serde_json::from_str("not json");
        let err: AppError = parse.unwrap_err().into();
        assert!(matches!(err, AppError::Serialization(_)));
        assert!(err.to_string().starts_with("serialization error"));
    }
}

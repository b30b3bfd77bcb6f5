use std::io;
use thiserror::Error;

/// Custom error type for thermbar
#[derive(Error, Debug)]
pub enum ThermbarError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Result type alias for thermbar
pub type Result<T> = std::result::Result<T, ThermbarError>;

impl ThermbarError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ThermbarError::Config(msg.into())
    }

    /// Create an invalid path error
    pub fn invalid_path<S: Into<String>>(msg: S) -> Self {
        ThermbarError::InvalidPath(msg.into())
    }
}

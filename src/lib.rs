// thermbar Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, ThermbarError};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;

// Initialize logging. Logs go to stderr, stdout carries the bar text.
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

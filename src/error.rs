//! Unified error types for the moncal application.

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Clipboard copy errors. Only surfaced when both the system clipboard and
/// the terminal escape fallback fail.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("System clipboard unavailable: {0}")]
    System(#[from] arboard::Error),

    #[error("Terminal escape write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for clipboard operations
pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

//! Error types for the termfolio interpreter core.
//!
//! Uses `thiserror` for public API error types. Note that user-input
//! conditions (unknown command, bad index, unknown theme) are NOT errors:
//! they resolve to formatted output inside the interpreter. These types
//! cover the boundary with the host — configuration and persistence.

use std::path::PathBuf;

/// Top-level error type for the termfolio core library.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the portfolio configuration system.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ParseError { message: String },
}

/// Errors from theme lookup and persistence.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Unknown theme: {name}")]
    Unknown { name: String },

    #[error("Theme persistence error: {message}")]
    Persistence { message: String },
}

/// A type alias for results using the top-level `TermfolioError`.
pub type Result<T> = std::result::Result<T, TermfolioError>;

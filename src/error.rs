//! Domain error types for spinwheel
//!
//! The engine itself never errors (bad input is absorbed as a no-op), so the
//! only fallible domain is host-side configuration. Terminal and I/O
//! failures surface as `anyhow` at the binary boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, String),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, String),
}

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

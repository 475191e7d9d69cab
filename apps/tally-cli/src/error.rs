//! # CLI Error Types
//!
//! Everything that can go wrong at the boundary: reading files, loading
//! configuration, and failures surfaced from the core pipeline.

use std::path::PathBuf;

use tally_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    // =========================================================================
    // Input Errors
    // =========================================================================
    /// The basket source could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The config file exists but could not be read.
    #[error("Failed to load config {}: {source}", .path.display())]
    ConfigLoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The merged configuration violates a tax policy invariant.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    // =========================================================================
    // Pipeline Errors
    // =========================================================================
    /// Parsing, validation or serialization failed in the core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

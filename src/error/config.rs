//! Configuration error module.
//!
//! Errors raised while loading and deserializing trie settings.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when a source cannot be parsed or deserialized.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),
}

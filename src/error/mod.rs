//! Error module for the ordered trie crate.
//!
//! Each data structure defines its own error enum next to its code; this
//! module aggregates them with the configuration errors so callers chaining
//! both can propagate with `?`.

use thiserror::Error;

use crate::data_structures::ordered_trie::TrieError;

pub mod config;

/// Result type alias used across the crate boundary.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error enum for the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Errors from building or appending to a trie.
    #[error("Trie error: {0}")]
    Trie(#[from] TrieError),

    /// Errors occurring during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

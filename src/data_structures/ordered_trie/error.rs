// Copyright (c) 2025 Ordered Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the ordered trie.

use std::fmt;

/// Errors that can occur while building or appending to an ordered trie.
///
/// All of them signal caller misuse and are not retryable.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// Keys and values given to a build differ in length.
    #[error("length of keys and values not equal: {keys} keys, {values} values")]
    LengthMismatch {
        /// Number of keys.
        keys: usize,
        /// Number of values.
        values: usize,
    },

    /// The appended key is already present.
    #[error("append {}: keys can not be duplicate", .key.escape_ascii())]
    DuplicateKeys {
        /// The offending key.
        key: Vec<u8>,
    },

    /// The appended key is not greater than every previously appended key.
    #[error("append {}{reason}: keys not ascending sorted", .key.escape_ascii())]
    OutOfOrder {
        /// The offending key.
        key: Vec<u8>,
        /// How the key violates the ordering.
        reason: OrderViolation,
    },

    /// The key would extend a path compressed by a full squash.
    #[error("append {}: keys can not be appended below a squashed path", .key.escape_ascii())]
    SquashedPath {
        /// The offending key.
        key: Vec<u8>,
    },
}

/// The way an out-of-order key relates to the keys already present.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OrderViolation {
    /// The key sorts before the greatest key present.
    Descending,
    /// The key is a strict prefix of a key present.
    Prefix,
}

impl fmt::Display for OrderViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderViolation::Descending => Ok(()),
            OrderViolation::Prefix => f.write_str(" is a prefix"),
        }
    }
}

/// Result type for ordered trie operations
pub type TrieResult<T> = std::result::Result<T, TrieError>;

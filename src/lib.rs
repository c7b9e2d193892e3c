//! Ordered Trie Library
//!
//! An index over byte-string keys appended in strictly ascending order. Chains
//! of single-branch nodes can be squashed into multi-byte steps, and a single
//! descent reports the value of a key together with the values of its nearest
//! neighbors.
//!
//! # Architecture
//!
//! - [`data_structures::ordered_trie`] holds the trie and its engines
//!   (append, squash, search, dedup).
//! - [`data_structures::tree_walk`] provides the generic traversals the
//!   engines and the renderer are built on.
//! - [`config`] loads the construction policy from files and the environment.
//! - [`error`] aggregates the error types for callers combining both.

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

use config::ConfigLoader;
use data_structures::ordered_trie::OrderedTrie;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads a [`config::TrieConfig`] through `loader` and builds a trie from
/// ascending `keys` and their `values` under that policy.
///
/// # Returns
///
/// * `Ok(OrderedTrie)` - The populated trie.
/// * `Err(error::Error::Config)` - If the configuration cannot be loaded.
/// * `Err(error::Error::Trie)` - If the keys are rejected.
pub fn build_from_config<K, I, V>(loader: &ConfigLoader, keys: &[K], values: I) -> error::Result<OrderedTrie<V>>
where
    K: AsRef<[u8]>,
    I: IntoIterator<Item = V>,
{
    let config = loader.load()?;
    let trie = OrderedTrie::build_with_config(keys, values, &config)?;
    Ok(trie)
}

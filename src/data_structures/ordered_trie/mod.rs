// Copyright (c) 2025 Ordered Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ordered trie over byte-string keys.
//!
//! Keys are appended in strictly ascending order. Chains of single-branch
//! nodes can be squashed into multi-byte steps, and a search returns the
//! value of the key along with the values of its nearest neighbors.
//!
//! # Features
//!
//! - Bulk construction from sorted keys and values.
//! - Incremental, ascending-only appends with optional squashing of subtrees
//!   no later key can reach.
//! - Predecessor / exact / successor lookup in one descent.
//! - Run-length deduplication of leaves sharing a value.
//!
//! # Example
//!
//! ```
//! use ordered_trie::data_structures::ordered_trie::OrderedTrie;
//!
//! let trie = OrderedTrie::build(&["abc", "abd", "b"], vec![1, 2, 3], true).unwrap();
//!
//! let found = trie.search(b"abd");
//! assert_eq!(found.lesser, Some(&1));
//! assert_eq!(found.equal, Some(&2));
//! assert_eq!(found.greater, Some(&3));
//!
//! // "abe" sits between "abd" and "b".
//! let found = trie.search(b"abe");
//! assert_eq!(found.lesser, Some(&2));
//! assert_eq!(found.equal, None);
//! assert_eq!(found.greater, Some(&3));
//! ```

mod append;
mod dedup;
mod error;
mod label;
mod locate;
mod node;
mod search;
mod squash;

#[cfg(test)]
mod tests;

use std::fmt;

pub use dedup::DedupSummary;
pub use error::{OrderViolation, TrieError, TrieResult};
pub use label::Label;
pub use locate::{neighbor_branches, neighbor_branches_by};
pub use node::Node;
pub use search::SearchResult;

use crate::config::TrieConfig;
use crate::data_structures::tree_walk;

/// An ordered trie owning its root node.
///
/// The root always exists, even when no key has been appended. The trie
/// tracks how many non-terminal nodes it holds, the root included.
#[derive(Debug, Clone)]
pub struct OrderedTrie<V> {
    /// The root node
    root: Node<V>,

    /// Number of non-terminal nodes
    inner_nodes: usize,

    /// Whether each append squashes the subtree it closes
    squash_on_insert: bool,
}

impl<V> OrderedTrie<V> {
    /// Creates an empty trie.
    ///
    /// # Arguments
    ///
    /// * `squash_on_insert` - Squash closed subtrees after every append.
    pub fn new(squash_on_insert: bool) -> Self {
        Self {
            root: Node::new(),
            inner_nodes: 1,
            squash_on_insert,
        }
    }

    /// Creates an empty trie with the policy from `config`.
    pub fn with_config(config: &TrieConfig) -> Self {
        Self::new(config.squash)
    }

    /// Builds a trie from ascending `keys` and the values bound to them.
    ///
    /// When `squash` is set, closed subtrees are squashed while appending and
    /// the whole trie is squashed once every key is in. That final squash
    /// compresses the path of the greatest key, so further appends to a
    /// trie built this way fail with `TrieError::SquashedPath` unless
    /// nothing on that path could be merged.
    ///
    /// # Returns
    ///
    /// * `Ok(OrderedTrie)` - The populated trie.
    /// * `Err(TrieError::LengthMismatch)` - If `keys` and `values` differ in length.
    /// * `Err(TrieError)` - The first append failure, naming the offending key.
    pub fn build<K, I>(keys: &[K], values: I, squash: bool) -> TrieResult<Self>
    where
        K: AsRef<[u8]>,
        I: IntoIterator<Item = V>,
    {
        let values: Vec<V> = values.into_iter().collect();
        if keys.len() != values.len() {
            return Err(TrieError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        let mut trie = Self::new(squash);
        for (key, value) in keys.iter().zip(values) {
            trie.append(key.as_ref(), value)?;
        }
        if squash {
            trie.squash();
        }

        tracing::debug!(
            keys = keys.len(),
            squash,
            inner_nodes = trie.inner_nodes,
            "built ordered trie"
        );

        Ok(trie)
    }

    /// Builds a trie with the policy from `config`.
    pub fn build_with_config<K, I>(keys: &[K], values: I, config: &TrieConfig) -> TrieResult<Self>
    where
        K: AsRef<[u8]>,
        I: IntoIterator<Item = V>,
    {
        Self::build(keys, values, config.squash)
    }

    /// Appends `key`, which must be greater than every key already present.
    ///
    /// # Returns
    ///
    /// * `Ok(&Node)` - The terminal leaf holding `value`.
    /// * `Err(TrieError::DuplicateKeys)` - If `key` is already present.
    /// * `Err(TrieError::OutOfOrder)` - If `key` sorts before a present key or is a
    ///   prefix of one.
    /// * `Err(TrieError::SquashedPath)` - If [`squash`](Self::squash) compressed
    ///   the path `key` would extend.
    ///
    /// A failed append leaves the trie unchanged.
    pub fn append(&mut self, key: &[u8], value: V) -> TrieResult<&Node<V>> {
        let appended = match self.root.append(key, value, self.squash_on_insert) {
            Ok(appended) => appended,
            Err(err) => {
                tracing::debug!(error = %err, "append rejected");
                return Err(err);
            }
        };

        if appended.merged > 0 {
            tracing::trace!(
                key = %key.escape_ascii(),
                merged = appended.merged,
                "squashed closed subtree"
            );
        }

        self.inner_nodes = self.inner_nodes + appended.created - appended.merged;
        Ok(appended.leaf)
    }

    /// Looks up `key` and its nearest neighbors.
    ///
    /// See [`Node::search`].
    pub fn search(&self, key: &[u8]) -> SearchResult<'_, V> {
        self.root.search(key)
    }

    /// Squashes the whole trie and returns the number of nodes eliminated.
    ///
    /// This also compresses the path of the greatest key, which `append`
    /// walks one byte per node: appends reaching a compressed node on that
    /// path fail with `TrieError::SquashedPath`. Call it once all keys are in.
    ///
    /// Lookups of present keys are unaffected. Compressed steps skip key
    /// bytes without comparing them, so a key that is absent may get a
    /// different result afterwards, including an `equal` value: with the
    /// single key `"abc"`, searching `"xyz"` reports the value of `"abc"`
    /// once squashed.
    pub fn squash(&mut self) -> usize {
        let merged = self.root.squash();
        self.inner_nodes -= merged;
        tracing::trace!(merged, inner_nodes = self.inner_nodes, "squashed trie");
        merged
    }

    /// The root node.
    pub fn root(&self) -> &Node<V> {
        &self.root
    }

    /// Number of non-terminal nodes, the root included.
    pub fn inner_node_count(&self) -> usize {
        self.inner_nodes
    }

    /// Whether each append squashes the subtree it closes.
    pub fn squash_on_insert(&self) -> bool {
        self.squash_on_insert
    }
}

impl<V: PartialEq> OrderedTrie<V> {
    /// Removes every leaf whose value equals the value of the preceding leaf,
    /// along with inner nodes left without branches.
    ///
    /// See [`Node::remove_same_leaf`].
    pub fn remove_same_leaf(&mut self) -> DedupSummary {
        let summary = self.root.remove_same_leaf();
        self.inner_nodes -= summary.inner_nodes;
        tracing::debug!(
            leaves = summary.leaves,
            inner_nodes = summary.inner_nodes,
            "removed repeated leaves"
        );
        summary
    }
}

impl<V> Default for OrderedTrie<V> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<V: fmt::Debug> fmt::Display for OrderedTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&tree_walk::render(&self.root))
    }
}

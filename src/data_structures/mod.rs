//! Data structures for the ordered trie crate.
//!
//! - `ordered_trie`: the ascending-append, squashable byte-key trie.
//! - `tree_walk`: traversal and rendering shared by ordered trees.

pub mod ordered_trie;
pub mod tree_walk;

// Re-export common data structures
pub use ordered_trie::{OrderedTrie, SearchResult, TrieError, TrieResult};

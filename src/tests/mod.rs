//! Test modules for the ordered trie crate.
//!
//! Per-structure unit and property tests live next to each data structure;
//! this module holds the shared utilities and the configuration tests.

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{count_inner_nodes, create_test_dir, init_test_logging, key_set_strategy, key_strategy};

// Copyright (c) 2025 Ordered Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the ordered trie public API.

use std::fs;

use ordered_trie::config::{ConfigLoader, TrieConfig};
use ordered_trie::data_structures::ordered_trie::{Label, OrderViolation, OrderedTrie, TrieError};
use ordered_trie::data_structures::tree_walk::depth_first;
use ordered_trie::error::Error;

fn leaves<V: Copy>(trie: &OrderedTrie<V>) -> Vec<V> {
    let mut out = Vec::new();
    depth_first(trie.root(), |visit| {
        if let Some(v) = visit.leaf_value() {
            out.push(*v);
        }
    });
    out
}

#[test]
fn test_range_index_lookup() {
    // Lower bounds of key ranges mapped to the shard owning them.
    let bounds = ["", "apple", "banana", "cherry", "kiwi", "melon"];
    let shards = ["s0", "s1", "s2", "s3", "s4", "s5"];
    let trie = OrderedTrie::build(&bounds, shards, false).unwrap();

    let found = trie.search(b"blueberry");
    assert_eq!(found.lesser, Some(&"s2"));
    assert_eq!(found.equal, None);
    assert_eq!(found.greater, Some(&"s3"));

    let found = trie.search(b"kiwi");
    assert_eq!(found.equal, Some(&"s4"));
    assert_eq!(found.lesser, Some(&"s3"));
    assert_eq!(found.greater, Some(&"s5"));

    let found = trie.search(b"zucchini");
    assert_eq!(found.lesser, Some(&"s5"));
    assert_eq!(found.greater, None);

    assert_eq!(trie.search(b"").equal, Some(&"s0"));
}

#[test]
fn test_squashed_trie_keeps_present_keys() {
    let keys = ["abc", "abcd", "abd", "b", "bcdef", "bcdeg"];
    let plain = OrderedTrie::build(&keys, 0..6, false).unwrap();
    let squashed = OrderedTrie::build(&keys, 0..6, true).unwrap();

    assert!(squashed.inner_node_count() < plain.inner_node_count());
    for key in keys {
        assert_eq!(
            squashed.search(key.as_bytes()),
            plain.search(key.as_bytes()),
            "lookup of {key}"
        );
    }

    // "cde" below 'b' collapses into a single edge.
    let b = squashed.root().child(Label::Byte(b'b')).unwrap();
    assert_eq!(b.branches().collect::<Vec<_>>(), vec![Label::Terminal, Label::Byte(b'c')]);
    assert_eq!(b.child(Label::Byte(b'c')).unwrap().step(), 3);
}

#[test]
fn test_incremental_appends() {
    let mut trie = OrderedTrie::with_config(&TrieConfig { squash: true });
    for (i, key) in ["aa", "ab", "b", "ba"].iter().enumerate() {
        let leaf = trie.append(key.as_bytes(), i).unwrap();
        assert!(leaf.is_leaf());
    }

    let err = trie.append(b"a", 9).unwrap_err();
    assert_eq!(
        err,
        TrieError::OutOfOrder {
            key: b"a".to_vec(),
            reason: OrderViolation::Prefix,
        }
    );
    assert_eq!(err.to_string(), "append a is a prefix: keys not ascending sorted");

    let err = trie.append(b"b", 9).unwrap_err();
    assert_eq!(err.to_string(), "append b: keys can not be duplicate");

    assert_eq!(leaves(&trie), vec![0, 1, 2, 3]);
}

#[test]
fn test_remove_same_leaf_compacts_runs() {
    let keys = ["a1", "a2", "a3", "b1", "b2", "c"];
    let mut trie = OrderedTrie::build(&keys, ["x", "x", "y", "y", "x", "x"], false).unwrap();

    let summary = trie.remove_same_leaf();
    assert_eq!(summary.leaves, 3);
    assert_eq!(leaves(&trie), vec!["x", "y", "x"]);

    // "a2" is gone: its neighbors are now "a1" and "a3".
    let found = trie.search(b"a2");
    assert_eq!((found.lesser, found.equal, found.greater), (Some(&"x"), None, Some(&"y")));
}

#[test]
fn test_build_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trie.toml");
    fs::write(&path, "squash = true\n").unwrap();

    let loader = ConfigLoader::new(Some(&path), "ORDERED_TRIE_IT");
    let trie = ordered_trie::build_from_config(&loader, &["xyz1", "xyz2"], [1, 2]).unwrap();
    assert_eq!(trie.root().step(), 4);
    assert_eq!(trie.search(b"xyz2").equal, Some(&2));

    let err = ordered_trie::build_from_config(&loader, &["k"], Vec::<i32>::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Trie(TrieError::LengthMismatch { keys: 1, values: 0 })
    ));
}

#[test]
fn test_display_lists_every_node() {
    let trie = OrderedTrie::build(&["a", "ab"], vec![1, 2], false).unwrap();
    let expected = "\
.
└── a
    ├── $ = 1
    └── b
        └── $ = 2
";
    assert_eq!(trie.to_string(), expected);
}

// Copyright (c) 2025 Ordered Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Strictly ascending insertion.

use super::error::{OrderViolation, TrieError, TrieResult};
use super::label::Label;
use super::node::Node;

/// Outcome of a successful append.
#[derive(Debug)]
pub(crate) struct Appended<'a, V> {
    /// The terminal leaf holding the new value
    pub(crate) leaf: &'a Node<V>,

    /// Inner nodes created for the new key
    pub(crate) created: usize,

    /// Inner nodes eliminated by squashing the closed sibling subtree
    pub(crate) merged: usize,
}

impl<V> Node<V> {
    /// Adds `key` below this node, which must be greater than every key
    /// already present.
    ///
    /// Every check runs before the tree is touched, so an error leaves it
    /// unchanged. With `squash` set, the subtree under the previous last
    /// branch of the attach point is compressed: no later key can extend it.
    ///
    /// The walk consumes one byte per node. A compressed node stores none of
    /// the bytes it skips, so a key is never placed below one: reaching a
    /// compressed node on the path of the greatest key fails with
    /// `SquashedPath`, and reaching one anywhere else means the key sorts
    /// below the greatest key.
    pub(crate) fn append(&mut self, key: &[u8], value: V, squash: bool) -> TrieResult<Appended<'_, V>> {
        if self.step > 1 {
            return Err(TrieError::SquashedPath { key: key.to_vec() });
        }

        let mut node = self;
        let mut matched = 0;

        // Whether every edge taken so far was the last one of its node, i.e.
        // the walk follows the path of the greatest key.
        let mut on_greatest_path = true;

        while matched < key.len() {
            let label = Label::Byte(key[matched]);
            match node.position(label) {
                Some(i) => {
                    on_greatest_path &= i + 1 == node.edges.len();
                    node = &mut node.edges[i].node;
                    matched += 1;

                    if node.step > 1 {
                        return Err(if on_greatest_path {
                            TrieError::SquashedPath { key: key.to_vec() }
                        } else {
                            descending(key)
                        });
                    }
                }
                None => {
                    let below_last = node.last_label().map_or(false, |last| last > label);
                    if below_last || !on_greatest_path {
                        return Err(descending(key));
                    }
                    break;
                }
            }
        }

        if matched == key.len() {
            if node.position(Label::Terminal).is_some() {
                return Err(TrieError::DuplicateKeys { key: key.to_vec() });
            }
            if node.degree() != 0 {
                return Err(TrieError::OutOfOrder {
                    key: key.to_vec(),
                    reason: OrderViolation::Prefix,
                });
            }
        }

        let merged = match node.edges.last_mut() {
            Some(closed) if squash => closed.node.squash(),
            _ => 0,
        };

        let created = key.len() - matched;
        let mut tail = node;
        for &b in &key[matched..] {
            tail = tail.push_edge(Label::Byte(b), Node::new());
        }
        let leaf = tail.push_edge(Label::Terminal, Node::leaf(value));

        Ok(Appended {
            leaf,
            created,
            merged,
        })
    }
}

fn descending(key: &[u8]) -> TrieError {
    TrieError::OutOfOrder {
        key: key.to_vec(),
        reason: OrderViolation::Descending,
    }
}

// Copyright (c) 2025 Ordered Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Approximate ordered lookup.

use super::label::Label;
use super::locate::neighbor_branches_by;
use super::node::Node;

/// Values around a searched key.
#[derive(Debug, PartialEq, Eq)]
pub struct SearchResult<'a, V> {
    /// Value of the nearest key below the searched one
    pub lesser: Option<&'a V>,

    /// Value of the searched key itself
    pub equal: Option<&'a V>,

    /// Value of the nearest key above the searched one
    pub greater: Option<&'a V>,
}

impl<V> Node<V> {
    /// Looks up `key`, returning its value along with the values of its
    /// neighbors in key order.
    ///
    /// Each hop skips `step` bytes of `key` and branches on the next one. The
    /// skipped bytes are not compared, so after squashing a key absent from
    /// the trie may still report an `equal` value.
    pub fn search(&self, key: &[u8]) -> SearchResult<'_, V> {
        let mut node = self;
        let mut lesser: Option<&Node<V>> = None;
        let mut greater: Option<&Node<V>> = None;
        let mut equal: Option<&Node<V>> = None;

        // Number of key bytes consumed once the current node branches.
        let mut consumed = 0;

        loop {
            consumed += node.step;
            let index = consumed - 1;

            if key.len() < index {
                greater = Some(node);
                break;
            }

            let probe = Label::probe(key, index);
            let (left, right) = neighbor_branches_by(&node.edges, &probe, |e| &e.label);
            if let Some(l) = left {
                lesser = Some(&node.edges[l].node);
            }
            if let Some(r) = right {
                greater = Some(&node.edges[r].node);
            }

            match node.child(probe) {
                Some(child) if probe.is_terminal() => {
                    equal = Some(child);
                    break;
                }
                Some(child) => node = child,
                None => break,
            }
        }

        SearchResult {
            lesser: lesser.and_then(|n| n.right_most().value()),
            equal: equal.and_then(Node::value),
            greater: greater.and_then(|n| n.left_most().value()),
        }
    }
}

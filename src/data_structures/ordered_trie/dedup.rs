// Copyright (c) 2025 Ordered Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Removal of leaves repeating the value of the preceding leaf.

use super::node::Node;
use crate::data_structures::tree_walk::{depth_first, retain_depth_first};

/// Nodes detached by [`Node::remove_same_leaf`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupSummary {
    /// Leaves dropped because they repeated the preceding value
    pub leaves: usize,

    /// Inner nodes dropped because all their branches were removed
    pub inner_nodes: usize,
}

impl<V: PartialEq> Node<V> {
    /// Collapses every run of consecutive leaves sharing a value down to its
    /// first leaf.
    ///
    /// ```text
    /// a -+-> a ------> =1
    ///    +-> b ------> =2
    ///    `-> c -> d -> g =2   // g and d are removed, c still has h
    ///          `-> h ----> =3
    /// ```
    ///
    /// Inner nodes left without branches are removed as well; this node is
    /// never removed.
    pub fn remove_same_leaf(&mut self) -> DedupSummary {
        let mut keep_leaf = Vec::new();
        let mut last_kept: Option<&V> = None;

        depth_first(&*self, |visit| {
            if let Some(v) = visit.leaf_value() {
                let repeated = last_kept == Some(v);
                if !repeated {
                    last_kept = Some(v);
                }
                keep_leaf.push(!repeated);
            }
        });

        let mut marks = keep_leaf.into_iter();
        let mut summary = DedupSummary::default();

        retain_depth_first(self, |node| {
            if node.is_leaf() {
                let keep = marks.next().unwrap_or(true);
                if !keep {
                    summary.leaves += 1;
                }
                keep
            } else {
                let keep = node.degree() != 0;
                if !keep {
                    summary.inner_nodes += 1;
                }
                keep
            }
        });

        summary
    }
}

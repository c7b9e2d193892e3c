// Copyright (c) 2025 Ordered Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Path compression of single-branch chains.

use super::node::{Edge, Node};

impl<V> Node<V> {
    /// Compresses this subtree by merging every node that has exactly one
    /// non-terminal branch into its child.
    ///
    /// The merged node takes over the child's branches and value and its step
    /// grows by the child's step. Branching nodes and terminal edges are left
    /// as they are. Returns the number of nodes eliminated.
    pub fn squash(&mut self) -> usize {
        let mut merged: usize = self.edges.iter_mut().map(|e| e.node.squash()).sum();

        if self.edges.len() == 1 && !self.edges[0].label.is_terminal() {
            if let Some(Edge { node: child, .. }) = self.edges.pop() {
                self.edges = child.edges;
                self.value = child.value;
                self.step += child.step;
                merged += 1;
            }
        }

        merged
    }
}

// Copyright (c) 2025 Ordered Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the ordered trie.
//!
//! Each node owns its children through a single vector of edges kept in
//! ascending label order. A terminal edge leads to a leaf carrying the value
//! bound to the key that ends there.

use std::fmt;

use super::label::Label;
use crate::data_structures::tree_walk::{self, Tree, TreeMut};

/// An outgoing edge: the label selecting it and the child it owns.
#[derive(Debug, Clone)]
pub(crate) struct Edge<V> {
    pub(crate) label: Label,
    pub(crate) node: Node<V>,
}

/// A node in the ordered trie.
#[derive(Debug, Clone)]
pub struct Node<V> {
    /// Outgoing edges, strictly ascending by label
    pub(crate) edges: Vec<Edge<V>>,

    /// Number of single-byte edges the incoming edge stands for
    pub(crate) step: usize,

    /// Value bound to a leaf reached through a terminal edge
    pub(crate) value: Option<V>,
}

impl<V> Node<V> {
    /// Creates an uncompressed node without children.
    pub(crate) fn new() -> Self {
        Self {
            edges: Vec::new(),
            step: 1,
            value: None,
        }
    }

    /// Creates a terminal leaf holding `value`.
    pub(crate) fn leaf(value: V) -> Self {
        Self {
            edges: Vec::new(),
            step: 1,
            value: Some(value),
        }
    }

    /// Number of uncompressed edges the incoming edge of this node represents.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The value bound to this node, if it is a leaf.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Returns `true` if this node carries a value.
    pub fn is_leaf(&self) -> bool {
        self.value.is_some()
    }

    /// Number of outgoing branches.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Outgoing branch labels in ascending order.
    pub fn branches(&self) -> impl Iterator<Item = Label> + '_ {
        self.edges.iter().map(|e| e.label)
    }

    /// The child reached through `label`.
    pub fn child(&self, label: Label) -> Option<&Node<V>> {
        self.position(label).map(|i| &self.edges[i].node)
    }

    /// The greatest outgoing label.
    pub(crate) fn last_label(&self) -> Option<Label> {
        self.edges.last().map(|e| e.label)
    }

    pub(crate) fn position(&self, label: Label) -> Option<usize> {
        self.edges.binary_search_by(|e| e.label.cmp(&label)).ok()
    }

    /// Appends an edge whose label is greater than every existing one.
    pub(crate) fn push_edge(&mut self, label: Label, node: Node<V>) -> &mut Node<V> {
        debug_assert!(self.last_label().map_or(true, |last| last < label));
        self.edges.push(Edge { label, node });
        let last = self.edges.len() - 1;
        &mut self.edges[last].node
    }

    /// Follows the first branch down to the node holding the smallest key.
    pub fn left_most(&self) -> &Node<V> {
        let mut node = self;
        while let Some(first) = node.edges.first() {
            node = &first.node;
        }
        node
    }

    /// Follows the last branch down to the node holding the greatest key.
    pub fn right_most(&self) -> &Node<V> {
        let mut node = self;
        while let Some(last) = node.edges.last() {
            node = &last.node;
        }
        node
    }
}

impl<V> Tree for Node<V> {
    type Label = Label;
    type Value = V;

    fn degree(&self) -> usize {
        self.edges.len()
    }

    fn child_at(&self, index: usize) -> (Label, &Self) {
        let edge = &self.edges[index];
        (edge.label, &edge.node)
    }

    fn leaf_value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    fn branch_text(label: Label, child: &Self) -> String {
        if child.step > 1 {
            format!("{label} (step {})", child.step)
        } else {
            label.to_string()
        }
    }
}

impl<V> TreeMut for Node<V> {
    fn child_at_mut(&mut self, index: usize) -> &mut Self {
        &mut self.edges[index].node
    }

    fn detach(&mut self, index: usize) -> Self {
        self.edges.remove(index).node
    }
}

impl<V: fmt::Debug> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&tree_walk::render(self))
    }
}

// Copyright (c) 2025 Ordered Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Generic depth-first traversal over labelled, ordered trees.
//!
//! Any structure exposing its children in branch order through [`Tree`] can be
//! walked, rendered as text, or pruned with [`retain_depth_first`] when it also
//! implements [`TreeMut`].
//!
//! # Example
//!
//! ```
//! use ordered_trie::data_structures::ordered_trie::OrderedTrie;
//! use ordered_trie::data_structures::tree_walk::depth_first;
//!
//! let trie = OrderedTrie::build(&["ab", "b"], vec![1, 2], false).unwrap();
//!
//! let mut leaves = Vec::new();
//! depth_first(trie.root(), |visit| {
//!     if let Some(v) = visit.leaf_value() {
//!         leaves.push(*v);
//!     }
//! });
//! assert_eq!(leaves, vec![1, 2]);
//! ```

use std::fmt::{self, Debug, Write};

/// A tree whose children are enumerated in branch order.
pub trait Tree: Sized {
    /// Label on the edge from a parent to a child.
    type Label: Copy + fmt::Display;

    /// Value carried by leaves.
    type Value;

    /// Number of children.
    fn degree(&self) -> usize;

    /// The `index`-th child, in ascending branch order, with its label.
    fn child_at(&self, index: usize) -> (Self::Label, &Self);

    /// The value of this node when it is a leaf.
    fn leaf_value(&self) -> Option<&Self::Value>;

    /// Text used for the edge leading to `child` when rendering.
    fn branch_text(label: Self::Label, _child: &Self) -> String {
        label.to_string()
    }
}

/// A [`Tree`] whose children can be modified and detached.
pub trait TreeMut: Tree {
    /// Mutable access to the `index`-th child.
    fn child_at_mut(&mut self, index: usize) -> &mut Self;

    /// Removes the `index`-th child and returns it.
    fn detach(&mut self, index: usize) -> Self;
}

/// A node reached during [`depth_first`].
pub struct Visit<'a, T: Tree> {
    /// The parent node, `None` for the root
    pub parent: Option<&'a T>,

    /// Label of the edge from the parent, `None` for the root
    pub label: Option<T::Label>,

    /// The visited node
    pub node: &'a T,

    /// Distance from the root
    pub depth: usize,
}

impl<'a, T: Tree> Visit<'a, T> {
    /// The visited node's leaf value.
    pub fn leaf_value(&self) -> Option<&'a T::Value> {
        self.node.leaf_value()
    }
}

/// Visits every node exactly once, parents before children and siblings in
/// branch order.
pub fn depth_first<'a, T, F>(root: &'a T, mut visit: F)
where
    T: Tree,
    F: FnMut(Visit<'a, T>),
{
    let mut stack = vec![Visit {
        parent: None,
        label: None,
        node: root,
        depth: 0,
    }];

    while let Some(current) = stack.pop() {
        let node = current.node;
        let depth = current.depth;

        // Push in reverse so the smallest branch is popped first.
        for i in (0..node.degree()).rev() {
            let (label, child) = node.child_at(i);
            stack.push(Visit {
                parent: Some(node),
                label: Some(label),
                node: child,
                depth: depth + 1,
            });
        }

        visit(current);
    }
}

/// Walks children before parents in branch order and detaches every non-root
/// node for which `keep` returns `false`.
///
/// A node is judged after its own children were processed, so `keep` sees the
/// children that survived. Returns the number of detached nodes; descendants of
/// a detached node are not counted separately.
pub fn retain_depth_first<T, F>(root: &mut T, mut keep: F) -> usize
where
    T: TreeMut,
    F: FnMut(&T) -> bool,
{
    retain_children(root, &mut keep)
}

fn retain_children<T, F>(node: &mut T, keep: &mut F) -> usize
where
    T: TreeMut,
    F: FnMut(&T) -> bool,
{
    let mut detached = 0;
    let mut i = 0;

    while i < node.degree() {
        let child = node.child_at_mut(i);
        detached += retain_children(child, keep);

        if keep(child) {
            i += 1;
        } else {
            drop(node.detach(i));
            detached += 1;
        }
    }

    detached
}

/// Renders the tree as one line per node.
///
/// ```text
/// .
/// ├── a
/// │   ├── b
/// │   │   └── $ = 1
/// ```
pub fn render<T>(root: &T) -> String
where
    T: Tree,
    T::Value: Debug,
{
    let mut out = String::from(".");
    if let Some(v) = root.leaf_value() {
        let _ = write!(out, " = {v:?}");
    }
    out.push('\n');
    render_children(root, "", &mut out);
    out
}

fn render_children<T>(node: &T, indent: &str, out: &mut String)
where
    T: Tree,
    T::Value: Debug,
{
    let degree = node.degree();
    for i in 0..degree {
        let (label, child) = node.child_at(i);
        let last = i + 1 == degree;

        out.push_str(indent);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(&T::branch_text(label, child));
        if let Some(v) = child.leaf_value() {
            let _ = write!(out, " = {v:?}");
        }
        out.push('\n');

        let next_indent = format!("{indent}{}", if last { "    " } else { "│   " });
        render_children(child, &next_indent, out);
    }
}

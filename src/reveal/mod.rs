// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cursor-driven partial views of a fully built tree.
//!
//! Revealing is a filter over the `revealed_at` stamps the builder computed; nothing is rebuilt
//! or repositioned when the cursor moves.

use crate::model::{NodeKey, RecipeTree, TreeEdge, TreeNode};

/// Visible subset of a tree for one cursor position.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    cursor: Option<usize>,
    nodes: Vec<&'a TreeNode>,
    edges: Vec<&'a TreeEdge>,
}

impl<'a> Frame<'a> {
    /// `None` for the base-element preview.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Visible nodes in pre-order (root first, left before right).
    pub fn nodes(&self) -> &[&'a TreeNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[&'a TreeEdge] {
        &self.edges
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.nodes.iter().any(|node| node.key() == key)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Cursor 0 shows the base elements only. Any later cursor `k` adds everything produced or
/// consumed by steps `0..=k`, plus the edges between visible nodes; base elements stay visible.
///
/// A cursor past the tree's last step is clamped to it.
pub fn reveal(tree: &RecipeTree, cursor: usize) -> Frame<'_> {
    let cursor = cursor.min(tree.upto());
    if cursor == 0 {
        return Frame { cursor: Some(0), ..reveal_base(tree) };
    }
    let nodes = tree
        .preorder()
        .into_iter()
        .filter(|node| is_preview(node) || node.revealed_at() <= cursor)
        .collect();
    let edges = tree.edges().values().filter(|edge| edge.revealed_at() <= cursor).collect();
    Frame { cursor: Some(cursor), nodes, edges }
}

/// Tier-0 nodes only, without edges: the view before the first step plays.
pub fn reveal_base(tree: &RecipeTree) -> Frame<'_> {
    let nodes = tree.preorder().into_iter().filter(|node| is_preview(node)).collect();
    Frame { cursor: None, nodes, edges: Vec::new() }
}

fn is_preview(node: &TreeNode) -> bool {
    node.tier() == 0
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::Serialize;
use smol_str::SmolStr;

use super::ids::{EdgeId, NodeKey};

/// How a node came to be in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Produced by a step of the sequence.
    Derived,
    /// A base element (tier 0 or one of the starting elements).
    Base,
    /// A leaf that no earlier step produces and that is not a base element.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    key: NodeKey,
    label: SmolStr,
    tier: u32,
    depth: usize,
    kind: NodeKind,
    children: Option<[NodeKey; 2]>,
    parent: Option<NodeKey>,
    step: Option<usize>,
    revealed_at: usize,
}

impl TreeNode {
    pub(crate) fn new(
        key: NodeKey,
        label: SmolStr,
        kind: NodeKind,
        children: Option<[NodeKey; 2]>,
        parent: Option<NodeKey>,
        step: Option<usize>,
        revealed_at: usize,
    ) -> Self {
        Self {
            tier: key.tier(),
            depth: key.depth(),
            key,
            label,
            kind,
            children,
            parent,
            step,
            revealed_at,
        }
    }

    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tier(&self) -> u32 {
        self.tier
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Ingredient nodes `(left, right)`; `None` for leaves.
    pub fn children(&self) -> Option<&[NodeKey; 2]> {
        self.children.as_ref()
    }

    /// The node consuming this one as an ingredient; `None` for the root.
    pub fn parent(&self) -> Option<&NodeKey> {
        self.parent.as_ref()
    }

    /// Index of the step producing this node; `None` for leaves.
    pub fn step(&self) -> Option<usize> {
        self.step
    }

    /// First cursor at which the node is visible during playback.
    pub fn revealed_at(&self) -> usize {
        self.revealed_at
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn is_base(&self) -> bool {
        self.kind == NodeKind::Base
    }
}

/// Directed `child -> parent` link: the ingredient flows into the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    id: EdgeId,
    revealed_at: usize,
}

impl TreeEdge {
    pub(crate) fn new(id: EdgeId, revealed_at: usize) -> Self {
        Self { id, revealed_at }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn child(&self) -> &NodeKey {
        self.id.child()
    }

    pub fn parent(&self) -> &NodeKey {
        self.id.parent()
    }

    pub fn revealed_at(&self) -> usize {
        self.revealed_at
    }
}

/// Immutable result of one tree build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeTree {
    root: NodeKey,
    upto: usize,
    nodes: BTreeMap<NodeKey, TreeNode>,
    edges: BTreeMap<EdgeId, TreeEdge>,
}

impl RecipeTree {
    pub(crate) fn new(
        root: NodeKey,
        upto: usize,
        nodes: BTreeMap<NodeKey, TreeNode>,
        edges: BTreeMap<EdgeId, TreeEdge>,
    ) -> Self {
        Self { root, upto, nodes, edges }
    }

    pub fn root(&self) -> &NodeKey {
        &self.root
    }

    pub fn root_node(&self) -> Option<&TreeNode> {
        self.nodes.get(&self.root)
    }

    /// Index of the step the tree was built up to (the root's producing step).
    pub fn upto(&self) -> usize {
        self.upto
    }

    pub fn nodes(&self) -> &BTreeMap<NodeKey, TreeNode> {
        &self.nodes
    }

    pub fn node(&self, key: &NodeKey) -> Option<&TreeNode> {
        self.nodes.get(key)
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, TreeEdge> {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaves(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.values().filter(|node| node.is_leaf())
    }

    /// Nodes in depth-first, left-before-right order starting at the root.
    pub fn preorder(&self) -> Vec<&TreeNode> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![&self.root];
        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            out.push(node);
            if let Some([left, right]) = node.children() {
                stack.push(right);
                stack.push(left);
            }
        }
        out
    }
}

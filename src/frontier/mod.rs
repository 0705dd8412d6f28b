// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Accumulated view of a live search expansion.

use std::collections::{BTreeMap, BTreeSet};

use crate::format::{FrontierEdge, FrontierEvent, FrontierNode};

/// Nodes and edges reported by the frontier stream so far, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontierGraph {
    nodes: Vec<FrontierNode>,
    node_index: BTreeMap<String, usize>,
    edges: Vec<FrontierEdge>,
    edge_ids: BTreeSet<String>,
    current: Option<String>,
    finished: bool,
}

impl FrontierGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one stream event; returns `true` when the graph changed.
    ///
    /// Node ids and edge ids already seen are skipped. The last node of every update becomes the
    /// current node even if it was known. Updates arriving after `End` are ignored.
    pub fn apply(&mut self, event: FrontierEvent) -> bool {
        if self.finished {
            tracing::debug!("frontier update after end of stream ignored");
            return false;
        }

        match event {
            FrontierEvent::End => {
                self.finished = true;
                true
            }
            FrontierEvent::Update { nodes, edges } => {
                let mut changed = false;
                let last = nodes.last().map(|node| node.id.clone());

                for node in nodes {
                    if self.node_index.contains_key(&node.id) {
                        continue;
                    }
                    self.node_index.insert(node.id.clone(), self.nodes.len());
                    self.nodes.push(node);
                    changed = true;
                }
                for edge in edges {
                    if self.edge_ids.insert(edge.id()) {
                        self.edges.push(edge);
                        changed = true;
                    }
                }

                if last.is_some() && last != self.current {
                    self.current = last;
                    changed = true;
                }
                changed
            }
        }
    }

    pub fn nodes(&self) -> &[FrontierNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&FrontierNode> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn edges(&self) -> &[FrontierEdge] {
        &self.edges
    }

    /// Most recently visited node.
    pub fn current(&self) -> Option<&FrontierNode> {
        self.current.as_deref().and_then(|id| self.node(id))
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

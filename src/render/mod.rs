// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plain-text and JSON renderings of revealed frames.
//!
//! Output is deterministic: nodes are emitted in the frame's pre-order, edges in key order.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::frontier::FrontierGraph;
use crate::layout::{Point, TreeLayout};
use crate::model::{NodeKey, NodeKind};
use crate::reveal::Frame;

const INDENT: &str = "  ";

/// Indented outline of the visible forest, one node per line.
///
/// A visible node whose parent is hidden starts a new top-level entry.
pub fn render_outline(frame: &Frame<'_>, layout: &TreeLayout) -> String {
    let mut levels = BTreeMap::<&NodeKey, usize>::new();
    let mut out = String::new();

    for node in frame.nodes() {
        let level = node
            .parent()
            .and_then(|parent| levels.get(parent))
            .map_or(0, |parent_level| parent_level + 1);
        levels.insert(node.key(), level);

        for _ in 0..level {
            out.push_str(INDENT);
        }
        let _ = write!(out, "{} (tier {})", node.label(), node.tier());
        if node.kind() == NodeKind::Unresolved {
            out.push_str(" [unresolved]");
        }
        if let Some(point) = layout.position(node.key()) {
            let _ = write!(out, " @ {:.0},{:.0}", point.x(), point.y());
        }
        out.push('\n');
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub id: String,
    pub label: String,
    pub tier: u32,
    pub depth: usize,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<usize>,
    pub position: Option<Point>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSnapshot {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Serializable copy of one frame, for `--json` output and golden tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub status: String,
    pub cursor: Option<usize>,
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
}

impl FrameSnapshot {
    pub fn new(frame: &Frame<'_>, layout: &TreeLayout, status: impl Into<String>) -> Self {
        let nodes = frame
            .nodes()
            .iter()
            .map(|node| NodeSnapshot {
                id: node.key().to_string(),
                label: node.label().to_owned(),
                tier: node.tier(),
                depth: node.depth(),
                kind: node.kind(),
                step: node.step(),
                position: layout.position(node.key()),
            })
            .collect();
        let edges = frame
            .edges()
            .iter()
            .map(|edge| EdgeSnapshot {
                id: edge.id().to_string(),
                source: edge.child().to_string(),
                target: edge.parent().to_string(),
            })
            .collect();
        Self { status: status.into(), cursor: frame.cursor(), nodes, edges }
    }
}

/// Frontier nodes indented by search depth; the current node is marked with `*`.
pub fn render_frontier(graph: &FrontierGraph) -> String {
    let current = graph.current().map(|node| node.id.as_str());
    let mut out = String::new();
    for node in graph.nodes() {
        for _ in 0..node.depth {
            out.push_str(INDENT);
        }
        let marker = if Some(node.id.as_str()) == current { "* " } else { "" };
        let _ = writeln!(out, "{marker}{} ({})", node.label, node.id);
    }
    let _ = writeln!(
        out,
        "{} nodes, {} edges{}",
        graph.nodes().len(),
        graph.edges().len(),
        if graph.is_finished() { ", search finished" } else { "" }
    );
    out
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::format::search::SearchMode;
use crate::model::{NodeKey, RecipeTree};

/// World-space position of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Converts layout units (leaf slots and depth levels) into world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutScale {
    pub column_width: f64,
    pub row_height: f64,
}

impl Default for LayoutScale {
    fn default() -> Self {
        Self { column_width: 180.0, row_height: 120.0 }
    }
}

/// Spacing parameters of the shared placement algorithm.
///
/// - `sibling`: slot advance between adjacent leaves of the same parent, per extra sibling.
/// - `cross_branch`: slot advance between adjacent leaves of different parents.
/// - `level`: vertical distance between depths, in rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    pub sibling: f64,
    pub cross_branch: f64,
    pub level: f64,
}

/// Placement strategy, chosen by the search mode that produced the steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// Breadth-first results: wide horizontal spread.
    #[default]
    Forward,
    /// Depth-first results: narrow and deep.
    Deep,
    /// Bidirectional results. Placed like [`LayoutStrategy::Forward`].
    Bidirectional,
}

impl LayoutStrategy {
    pub fn from_mode(mode: SearchMode) -> Self {
        match mode {
            SearchMode::Bfs | SearchMode::Multi => Self::Forward,
            SearchMode::Dfs => Self::Deep,
            SearchMode::Bidirectional => Self::Bidirectional,
        }
    }

    pub fn separation(self) -> Separation {
        match self {
            // TODO: place the two search frontiers on opposite sides of the meeting node once
            // the backend reports where the frontiers met.
            Self::Forward | Self::Bidirectional => {
                Separation { sibling: 1.0, cross_branch: 0.5, level: 1.0 }
            }
            Self::Deep => Separation { sibling: 0.6, cross_branch: 0.3, level: 1.5 },
        }
    }

    /// Assigns a position to every node reachable from the root.
    ///
    /// Leaves take increasing slots in left-to-right traversal order; every internal node sits
    /// at the midpoint of its outermost children. `y` depends on depth only. The result depends
    /// on nothing but the tree and the scale, so re-running it yields identical coordinates.
    #[tracing::instrument(skip(tree, scale), fields(nodes = tree.len()))]
    pub fn place(self, tree: &RecipeTree, scale: &LayoutScale) -> TreeLayout {
        let separation = self.separation();
        let mut slots = BTreeMap::<&NodeKey, f64>::new();
        let mut last_leaf: Option<(f64, Option<&NodeKey>)> = None;

        let mut stack = vec![(tree.root(), false)];
        while let Some((key, expanded)) = stack.pop() {
            let Some(node) = tree.node(key) else {
                continue;
            };

            match node.children() {
                Some([left, right]) if !expanded => {
                    stack.push((key, true));
                    stack.push((right, false));
                    stack.push((left, false));
                }
                Some(children) => {
                    let xs = children.iter().filter_map(|child| slots.get(child).copied());
                    let (min, max) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                        (lo.min(x), hi.max(x))
                    });
                    if min.is_finite() {
                        slots.insert(key, (min + max) / 2.0);
                    }
                }
                None => {
                    let parent = node.parent();
                    let slot = match last_leaf {
                        None => 0.0,
                        Some((last, last_parent)) if parent.is_some() && last_parent == parent => {
                            let siblings = parent
                                .and_then(|parent| tree.node(parent))
                                .and_then(|parent| parent.children())
                                .map_or(2, |children| children.len());
                            last + separation.sibling * (siblings - 1) as f64
                        }
                        Some((last, _)) => last + separation.cross_branch,
                    };
                    last_leaf = Some((slot, parent));
                    slots.insert(key, slot);
                }
            }
        }

        let positions = slots
            .into_iter()
            .filter_map(|(key, slot)| {
                let node = tree.node(key)?;
                let x = slot * scale.column_width;
                let y = node.depth() as f64 * separation.level * scale.row_height;
                Some((key.clone(), Point::new(x, y)))
            })
            .collect::<BTreeMap<_, _>>();

        tracing::trace!(strategy = ?self, placed = positions.len(), "layout placed");
        TreeLayout { strategy: self, positions }
    }
}

/// Positions of one placed tree, computed once and shared by every playback frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    strategy: LayoutStrategy,
    positions: BTreeMap<NodeKey, Point>,
}

impl TreeLayout {
    pub fn strategy(&self) -> LayoutStrategy {
        self.strategy
    }

    pub fn positions(&self) -> &BTreeMap<NodeKey, Point> {
        &self.positions
    }

    pub fn position(&self, key: &NodeKey) -> Option<Point> {
        self.positions.get(key).copied()
    }

    pub fn bounds(&self) -> Option<LayoutBounds> {
        let mut points = self.positions.values();
        let first = points.next()?;
        let init = LayoutBounds { min_x: first.x, max_x: first.x, min_y: first.y, max_y: first.y };
        Some(points.fold(init, |b, p| LayoutBounds {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Serialize, Serializer};
use smol_str::SmolStr;

/// Identity of one node in a reconstructed recipe tree.
///
/// The key is a property of tree *position*, not of the element: the same element reached at a
/// different depth, or a second time at the same depth, gets a different key. `occurrence`
/// counts earlier nodes with the same `(element, tier, depth)` within one build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    element: SmolStr,
    tier: u32,
    depth: usize,
    occurrence: usize,
}

impl NodeKey {
    pub fn new(element: impl Into<SmolStr>, tier: u32, depth: usize, occurrence: usize) -> Self {
        Self { element: element.into(), tier, depth, occurrence }
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn tier(&self) -> u32 {
        self.tier
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn occurrence(&self) -> usize {
        self.occurrence
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}-{}", self.element, self.tier, self.depth, self.occurrence)
    }
}

impl Serialize for NodeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Identity of a `child -> parent` edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    child: NodeKey,
    parent: NodeKey,
}

impl EdgeId {
    pub fn new(child: NodeKey, parent: NodeKey) -> Self {
        Self { child, parent }
    }

    pub fn child(&self) -> &NodeKey {
        &self.child
    }

    pub fn parent(&self) -> &NodeKey {
        &self.parent
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e-{}-{}", self.child, self.parent)
    }
}

impl Serialize for EdgeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{EdgeId, NodeKey};

    #[test]
    fn node_key_formats_like_the_frontend_ids() {
        let key = NodeKey::new("Mud", 1, 1, 0);
        assert_eq!(key.to_string(), "Mud-1-1-0");
    }

    #[test]
    fn edge_id_formats_child_then_parent() {
        let edge = EdgeId::new(NodeKey::new("Earth", 0, 2, 0), NodeKey::new("Mud", 1, 1, 0));
        assert_eq!(edge.to_string(), "e-Earth-0-2-0-Mud-1-1-0");
    }

    #[test]
    fn occurrence_distinguishes_otherwise_equal_keys() {
        let first = NodeKey::new("Water", 0, 2, 0);
        let second = NodeKey::new("Water", 0, 2, 1);
        assert_ne!(first, second);
        assert!(first < second);
    }

    #[test]
    fn serializes_as_display_string() {
        let key = NodeKey::new("Fire", 0, 1, 3);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"Fire-0-1-3\"");
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recipe-tree reconstruction from a flat step sequence.
//!
//! The tree is rooted at the result of one step and grows toward base elements: every
//! ingredient that an earlier step produced becomes a subtree, everything else a leaf.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use crate::model::{EdgeId, NodeKey, NodeKind, RecipeTree, StepSequence, TreeEdge, TreeNode};

/// Elements the backend starts every search from.
pub const BASE_ELEMENTS: [&str; 4] = ["air", "earth", "fire", "water"];

/// `true` for tier-0 elements and for the starting elements regardless of the reported tier.
pub fn is_base_element(name: &str, tier: u32) -> bool {
    tier == 0 || BASE_ELEMENTS.iter().any(|base| base.eq_ignore_ascii_case(name))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("step sequence is empty")]
    EmptySequence,
    #[error("upto index {upto} is out of range for a sequence of {len} steps")]
    UptoOutOfRange { upto: usize, len: usize },
}

/// Builds the tree rooted at `steps[upto].result`, resolving ingredients against steps
/// `0..upto` only.
///
/// Every visit creates a new node: an element consumed in two branches, or combined with
/// itself, appears once per use with its own key. Ingredients that no earlier step produces
/// become leaves, including malformed references, which are kept as [`NodeKind::Unresolved`].
#[tracing::instrument(skip(steps), fields(steps = steps.len()))]
pub fn build_tree(steps: &StepSequence, upto: usize) -> Result<RecipeTree, BuildError> {
    if steps.is_empty() {
        return Err(BuildError::EmptySequence);
    }
    let Some(root_step) = steps.get(upto) else {
        return Err(BuildError::UptoOutOfRange { upto, len: steps.len() });
    };

    let mut builder = Builder::new(steps);
    let root = builder.run(Pending {
        label: SmolStr::new(root_step.result()),
        tier: root_step.tiers().result,
        depth: 0,
        step: Some(upto),
        revealed_at: upto,
    });
    let tree = builder.finish(root, upto);

    tracing::debug!(nodes = tree.len(), edges = tree.edges().len(), "recipe tree built");
    Ok(tree)
}

/// Builds the complete tree for the last step of the sequence.
pub fn build_full_tree(steps: &StepSequence) -> Result<RecipeTree, BuildError> {
    build_tree(steps, steps.len().saturating_sub(1))
}

struct Pending {
    label: SmolStr,
    tier: u32,
    depth: usize,
    step: Option<usize>,
    revealed_at: usize,
}

enum Task {
    Enter(Pending),
    Exit(Pending),
}

struct Draft {
    key: NodeKey,
    label: SmolStr,
    kind: NodeKind,
    children: Option<[usize; 2]>,
    parent: Option<usize>,
    step: Option<usize>,
    revealed_at: usize,
}

struct Builder<'a> {
    steps: &'a StepSequence,
    occurrences: BTreeMap<(SmolStr, u32, usize), usize>,
    drafts: Vec<Draft>,
}

impl<'a> Builder<'a> {
    fn new(steps: &'a StepSequence) -> Self {
        Self { steps, occurrences: BTreeMap::new(), drafts: Vec::new() }
    }

    /// Post-order traversal with an explicit work stack; returns the root's draft index.
    fn run(&mut self, root: Pending) -> usize {
        let steps = self.steps;
        let mut tasks = vec![Task::Enter(root)];
        let mut finished = Vec::<usize>::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Enter(pending) => {
                    let resolved =
                        pending.step.and_then(|idx| steps.get(idx).map(|step| (idx, step)));
                    let Some((idx, step)) = resolved else {
                        let kind = if is_base_element(&pending.label, pending.tier) {
                            NodeKind::Base
                        } else {
                            tracing::debug!(
                                element = %pending.label,
                                tier = pending.tier,
                                produced_later = steps.is_produced(&pending.label),
                                "ingredient is not produced by an earlier step; keeping it as a leaf"
                            );
                            NodeKind::Unresolved
                        };
                        finished.push(self.push_draft(pending, kind, None));
                        continue;
                    };

                    let tiers = step.tiers();
                    let depth = pending.depth + 1;
                    let left = self.ingredient(step.left(), tiers.left, depth, idx);
                    let right = self.ingredient(step.right(), tiers.right, depth, idx);

                    tasks.push(Task::Exit(pending));
                    tasks.push(Task::Enter(right));
                    tasks.push(Task::Enter(left));
                }
                Task::Exit(pending) => {
                    let children = match (finished.pop(), finished.pop()) {
                        (Some(right), Some(left)) => Some([left, right]),
                        _ => None,
                    };
                    let id = self.push_draft(pending, NodeKind::Derived, children);
                    if let Some(children) = children {
                        for child in children {
                            self.drafts[child].parent = Some(id);
                        }
                    }
                    finished.push(id);
                }
            }
        }

        finished.pop().unwrap_or_default()
    }

    fn ingredient(&self, name: &str, tier: u32, depth: usize, consumer: usize) -> Pending {
        let step = self.steps.latest_producer(name, consumer);
        Pending {
            label: SmolStr::new(name),
            tier,
            depth,
            step,
            revealed_at: step.unwrap_or(consumer),
        }
    }

    fn push_draft(
        &mut self,
        pending: Pending,
        kind: NodeKind,
        children: Option<[usize; 2]>,
    ) -> usize {
        let slot = self
            .occurrences
            .entry((pending.label.clone(), pending.tier, pending.depth))
            .or_insert(0);
        let occurrence = *slot;
        *slot += 1;

        let key = NodeKey::new(pending.label.clone(), pending.tier, pending.depth, occurrence);
        self.drafts.push(Draft {
            key,
            label: pending.label,
            kind,
            children,
            parent: None,
            step: pending.step.filter(|_| children.is_some()),
            revealed_at: pending.revealed_at,
        });
        self.drafts.len() - 1
    }

    fn finish(self, root: usize, upto: usize) -> RecipeTree {
        let drafts = self.drafts;
        let mut nodes = BTreeMap::new();
        let mut edges = BTreeMap::new();

        for draft in &drafts {
            let parent = draft.parent.map(|idx| &drafts[idx]);
            if let Some(parent) = parent {
                let id = EdgeId::new(draft.key.clone(), parent.key.clone());
                edges.insert(id.clone(), TreeEdge::new(id, parent.revealed_at));
            }

            let children = draft
                .children
                .map(|[left, right]| [drafts[left].key.clone(), drafts[right].key.clone()]);
            nodes.insert(
                draft.key.clone(),
                TreeNode::new(
                    draft.key.clone(),
                    draft.label.clone(),
                    draft.kind,
                    children,
                    parent.map(|parent| parent.key.clone()),
                    draft.step,
                    draft.revealed_at,
                ),
            );
        }

        let root = drafts[root].key.clone();
        RecipeTree::new(root, upto, nodes, edges)
    }
}

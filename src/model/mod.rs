// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Step sequences come from the search backend; recipe trees are the immutable output of one
//! tree build.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod step;
pub mod tree;

pub use ids::{EdgeId, NodeKey};
pub use step::{StepSequence, SynthesisStep, Tiers};
pub use tree::{NodeKind, RecipeTree, TreeEdge, TreeNode};

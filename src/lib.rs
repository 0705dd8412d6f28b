// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recipe Tree: step-by-step recipe-tree reconstruction and playback for element-combination
//! search results.
//!
//! Data flows leaves first: a [`model::StepSequence`] from the search backend is turned into an
//! immutable [`model::RecipeTree`] by [`tree::build_tree`], placed once by
//! [`layout::LayoutStrategy::place`], and shown through [`reveal::reveal`] at the cursor of a
//! [`playback::Playback`].

pub mod config;
pub mod format;
pub mod frontier;
pub mod layout;
pub mod model;
pub mod playback;
pub mod render;
pub mod reveal;
pub mod tree;
pub mod viewer;

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for recipe trees.
//!
//! One bottom-up placement routine, configured per search mode through [`LayoutStrategy`].

pub mod tree;

pub use tree::{LayoutBounds, LayoutScale, LayoutStrategy, Point, Separation, TreeLayout};

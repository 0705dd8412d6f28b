// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One loaded search result and the playback over its selected recipe.
//!
//! Trees and layouts are built when a result is loaded and reused for every cursor position.

use rayon::prelude::*;

use crate::config::ViewerConfig;
use crate::format::{SearchMode, SearchOutcome};
use crate::layout::{LayoutStrategy, TreeLayout};
use crate::model::{RecipeTree, StepSequence};
use crate::playback::Playback;
use crate::reveal::{reveal, reveal_base, Frame};
use crate::tree::{build_full_tree, BuildError};

pub const NOT_FOUND_MESSAGE: &str = "Element not found. Please try another element.";

/// A recipe with its tree and placement.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipePath {
    steps: StepSequence,
    tree: RecipeTree,
    layout: TreeLayout,
}

impl RecipePath {
    fn build(
        steps: StepSequence,
        strategy: LayoutStrategy,
        config: &ViewerConfig,
    ) -> Result<Self, BuildError> {
        let tree = build_full_tree(&steps)?;
        let layout = strategy.place(&tree, &config.layout);
        Ok(Self { steps, tree, layout })
    }

    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    pub fn tree(&self) -> &RecipeTree {
        &self.tree
    }

    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }
}

#[derive(Debug, Clone)]
pub struct Viewer {
    config: ViewerConfig,
    mode: SearchMode,
    paths: Vec<RecipePath>,
    selected: usize,
    playback: Playback,
    error: Option<String>,
    rev: u64,
}

impl Viewer {
    pub fn new(config: ViewerConfig, mode: SearchMode) -> Self {
        let playback = Playback::new(0, config.playback.speed);
        Self { config, mode, paths: Vec::new(), selected: 0, playback, error: None, rev: 0 }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Bumped every time trees are rebuilt.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn paths(&self) -> &[RecipePath] {
        &self.paths
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_path(&self) -> Option<&RecipePath> {
        self.paths.get(self.selected)
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    /// User-visible message of the last failed or empty search.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the current result. Playback is always reset to the first step.
    pub fn load(&mut self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Found(result) => {
                self.error = None;
                self.replace_paths(result.paths().to_vec());
            }
            SearchOutcome::NotFound => {
                self.replace_paths(Vec::new());
                self.error = Some(NOT_FOUND_MESSAGE.to_owned());
            }
        }
    }

    /// Swaps in new recipes, building every tree in parallel. Empty sequences are dropped; an
    /// identical list of the remaining ones keeps the existing trees.
    #[tracing::instrument(skip_all, fields(mode = %self.mode, paths = sequences.len()))]
    pub fn replace_paths(&mut self, sequences: Vec<StepSequence>) {
        let sequences =
            sequences.into_iter().filter(|steps| !steps.is_empty()).collect::<Vec<_>>();
        let unchanged = sequences.len() == self.paths.len()
            && sequences.iter().zip(&self.paths).all(|(steps, path)| *steps == path.steps);

        if unchanged {
            tracing::debug!("sequences unchanged; keeping built trees");
        } else {
            let strategy = LayoutStrategy::from_mode(self.mode);
            let config = &self.config;
            let built = sequences
                .into_par_iter()
                .map(|steps| RecipePath::build(steps, strategy, config))
                .collect::<Result<Vec<_>, _>>();

            match built {
                Ok(paths) => self.paths = paths,
                Err(err) => {
                    self.paths.clear();
                    self.error = Some(err.to_string());
                }
            }
            self.rev += 1;
            tracing::debug!(built = self.paths.len(), rev = self.rev, "recipe trees built");
        }

        self.selected = 0;
        self.playback.replace(self.selected_step_count());
    }

    /// Re-places every tree for a new search mode; trees themselves are kept.
    pub fn set_mode(&mut self, mode: SearchMode) {
        let previous = LayoutStrategy::from_mode(self.mode);
        self.mode = mode;
        let strategy = LayoutStrategy::from_mode(mode);
        if strategy == previous {
            return;
        }

        let scale = self.config.layout;
        self.paths.par_iter_mut().for_each(|path| {
            path.layout = strategy.place(&path.tree, &scale);
        });
    }

    /// Records a user-visible failure (backend unreachable, bad response). Playback is untouched.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "search failed");
        self.error = Some(message);
    }

    /// Switches to another returned recipe; returns `false` for an unknown index.
    pub fn select_path(&mut self, index: usize) -> bool {
        if index >= self.paths.len() {
            return false;
        }
        if index != self.selected {
            self.selected = index;
            self.playback.replace(self.selected_step_count());
        }
        true
    }

    /// Visible part of the selected tree at the playback cursor; `None` without steps.
    pub fn frame(&self) -> Option<Frame<'_>> {
        let path = self.selected_path()?;
        let cursor = self.playback.cursor()?;
        Some(reveal(&path.tree, cursor))
    }

    /// Base elements of the selected tree, shown before playback starts.
    pub fn base_frame(&self) -> Option<Frame<'_>> {
        self.selected_path().map(|path| reveal_base(&path.tree))
    }

    pub fn status_line(&self) -> String {
        let mut line = self.playback.status_line();
        if self.paths.len() > 1 {
            line.push_str(&format!(" (recipe {} of {})", self.selected + 1, self.paths.len()));
        }
        line
    }

    fn selected_step_count(&self) -> usize {
        self.selected_path().map_or(0, |path| path.steps.len())
    }
}

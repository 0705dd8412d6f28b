// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FormatError;
use crate::model::{StepSequence, SynthesisStep};

/// Graph search the backend runs to find a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Bfs,
    Dfs,
    Bidirectional,
    /// Several distinct recipes for the same element, each returned as its own path.
    Multi,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Bidirectional => "bidirectional",
            Self::Multi => "multi",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "bidirectional" => Ok(Self::Bidirectional),
            "multi" => Ok(Self::Multi),
            _ => Err(FormatError::UnknownMode(s.to_owned())),
        }
    }
}

/// Query sent to the search backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    element: String,
    mode: SearchMode,
    max_recipes: Option<u32>,
}

impl SearchRequest {
    /// Element names are matched case-insensitively by the backend; the request carries them
    /// lowercased.
    pub fn new(element: &str, mode: SearchMode) -> Self {
        Self { element: element.trim().to_lowercase(), mode, max_recipes: None }
    }

    pub fn with_max_recipes(mut self, max_recipes: u32) -> Self {
        self.max_recipes = Some(max_recipes);
        self
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn max_recipes(&self) -> Option<u32> {
        self.max_recipes
    }

    /// `element=..&mode=..[&maxRecipes=..]`, percent-encoded.
    pub fn query_string(&self) -> String {
        let mut out = format!("element={}&mode={}", urlencoding::encode(&self.element), self.mode);
        if let Some(max) = self.max_recipes {
            let _ = write!(out, "&maxRecipes={max}");
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTarget {
    pub element: String,
    pub tier: u32,
}

/// Response body exactly as the backend sends it.
///
/// `paths` holds one step list per recipe; older backends send a single `path` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub found: bool,
    /// Number of nodes the search explored.
    #[serde(default)]
    pub steps: usize,
    /// Backend-side search time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<SearchTarget>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<Vec<SynthesisStep>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<SynthesisStep>,
}

/// A successful search, normalized: every recipe is a [`StepSequence`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    target: Option<SearchTarget>,
    paths: Vec<StepSequence>,
    explored: usize,
    execution_time_ms: Option<f64>,
}

impl SearchResult {
    pub fn new(paths: Vec<StepSequence>) -> Self {
        Self { target: None, paths, explored: 0, execution_time_ms: None }
    }

    pub fn target(&self) -> Option<&SearchTarget> {
        self.target.as_ref()
    }

    pub fn paths(&self) -> &[StepSequence] {
        &self.paths
    }

    pub fn explored(&self) -> usize {
        self.explored
    }

    pub fn execution_time_ms(&self) -> Option<f64> {
        self.execution_time_ms
    }
}

impl From<SearchResponse> for SearchResult {
    fn from(response: SearchResponse) -> Self {
        let paths = if response.paths.is_empty() && !response.path.is_empty() {
            vec![StepSequence::new(response.path)]
        } else {
            response.paths.into_iter().map(StepSequence::new).collect()
        };
        Self {
            target: response.target,
            paths,
            explored: response.steps,
            execution_time_ms: response.execution_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(SearchResult),
    NotFound,
}

/// Interprets one backend answer.
///
/// Both "not found" shapes the backend produces (HTTP 404, or 200 with `found: false`) map to
/// [`SearchOutcome::NotFound`].
pub fn parse_search_response(status: u16, body: &str) -> Result<SearchOutcome, FormatError> {
    if status == 404 {
        return Ok(SearchOutcome::NotFound);
    }
    if !(200..300).contains(&status) {
        return Err(FormatError::HttpStatus { status });
    }

    let response = serde_json::from_str::<SearchResponse>(body)?;
    if !response.found {
        return Ok(SearchOutcome::NotFound);
    }
    Ok(SearchOutcome::Found(response.into()))
}

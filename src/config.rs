// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Viewer configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all) is a valid config.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::layout::LayoutScale;
use crate::playback::Speed;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("open config '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    pub speed: Speed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub layout: LayoutScale,
    pub playback: PlaybackConfig,
}

impl ViewerConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(r)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| ConfigError::Open { path: path.to_path_buf(), source })?;
        let config = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Layout units must map to positive, finite world distances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let LayoutScale { column_width, row_height } = self.layout;
        for (name, value) in [("column_width", column_width), ("row_height", row_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "layout.{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

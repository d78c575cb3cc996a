// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::Path;

use crate::error::Result;
use crate::paths::DataPaths;
use crate::utils::write_atomic;

use super::Settings;

impl Settings {
    /// Load settings from the data directory.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        Self::load_from(&paths.settings_file())
    }

    /// Load settings from a specific path, defaulting when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the data directory.
    pub fn save(&self, paths: &DataPaths) -> Result<()> {
        self.save_to(&paths.settings_file())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        write_atomic(path, content.as_bytes())
    }
}

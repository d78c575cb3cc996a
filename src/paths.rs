// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Data directory layout
//!
//! Every record lives under a single root:
//!
//! ```text
//! <root>/
//!   tags.json
//!   settings.json
//!   2024-01-01.json            one plan per date
//!   templates/<category>/<name>.md
//!   backups/backup_20240101_090000.zip
//! ```
//!
//! The resolvers are pure path composition. `ensure_directories` is the only
//! function here that touches the filesystem.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{PlannerError, Result};
use crate::plans::PlanDate;

/// Name prefix shared by every backup archive
pub const BACKUP_PREFIX: &str = "backup_";

/// Extension used for template files
pub const TEMPLATE_EXTENSION: &str = "md";

/// Resolves canonical file locations from a root data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Create a resolver rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the data directory: explicit override, then `$PLANNER_HOME`,
    /// then `~/DailyPlannerData`.
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = override_dir {
            return Self::new(dir);
        }
        if let Ok(home) = std::env::var("PLANNER_HOME") {
            return Self::new(home);
        }
        Self::new(
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("DailyPlannerData"),
        )
    }

    /// The root data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Plan record for a date
    pub fn plan_file(&self, date: &PlanDate) -> PathBuf {
        self.root.join(format!("{}.json", date))
    }

    /// Root of the template library
    pub fn templates_root(&self) -> PathBuf {
        self.root.join("templates")
    }

    /// Directory holding one category's templates
    pub fn template_dir(&self, category: &str) -> PathBuf {
        self.templates_root().join(category)
    }

    /// Template file for (category, name)
    pub fn template_file(&self, category: &str, name: &str) -> PathBuf {
        self.template_dir(category)
            .join(format!("{}.{}", name, TEMPLATE_EXTENSION))
    }

    /// The tags record
    pub fn tags_file(&self) -> PathBuf {
        self.root.join("tags.json")
    }

    /// The settings file
    pub fn settings_file(&self) -> PathBuf {
        self.root.join("settings.json")
    }

    /// Directory receiving backup archives
    pub fn backup_dir(&self) -> PathBuf {
        self.root.join("backups")
    }

    /// Archive path for a backup taken at `timestamp`
    pub fn backup_file(&self, timestamp: NaiveDateTime) -> PathBuf {
        self.backup_dir().join(format!(
            "{}{}.zip",
            BACKUP_PREFIX,
            timestamp.format("%Y%m%d_%H%M%S")
        ))
    }

    /// Create the root, template and backup directories.
    ///
    /// Failure here is fatal: none of the stores can work without them.
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [self.root.clone(), self.templates_root(), self.backup_dir()] {
            if !dir.exists() {
                tracing::debug!("Creating data directory {}", dir.display());
                std::fs::create_dir_all(&dir)
                    .map_err(|source| PlannerError::DirectoryInit { path: dir, source })?;
            }
        }
        Ok(())
    }
}

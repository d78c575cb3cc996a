// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Plan storage implementation
//!
//! Each plan is a standalone JSON record named by its date. Nothing is cached:
//! every load re-reads the file.

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::PlanDate;
use crate::error::{PlannerError, Result};
use crate::paths::DataPaths;
use crate::tags::{TagStore, DEFAULT_TAGS};
use crate::utils::write_atomic;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single day's plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Canonical `YYYY-MM-DD` date, also the storage key
    #[serde(default)]
    pub date: String,
    /// Markdown content
    #[serde(default)]
    pub content: String,
    /// Category label
    #[serde(default = "legacy_default_tag")]
    pub tag: String,
    /// Completion flag
    #[serde(default)]
    pub done: bool,
    /// Local time of the last save, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub last_modified: String,
}

fn legacy_default_tag() -> String {
    DEFAULT_TAGS[0].to_string()
}

impl Plan {
    /// A blank, unsaved plan for `date`
    pub fn blank(date: &PlanDate, tag: impl Into<String>) -> Self {
        Self {
            date: date.to_string(),
            content: String::new(),
            tag: tag.into(),
            done: false,
            last_modified: String::new(),
        }
    }

    /// Whether the content is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Plan store over the data directory
#[derive(Debug, Clone)]
pub struct PlanStore {
    paths: DataPaths,
    tags: TagStore,
}

impl PlanStore {
    /// Create a plan store for a data directory
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            paths: paths.clone(),
            tags: TagStore::new(paths),
        }
    }

    /// Load the plan for `date`.
    ///
    /// Fails with `InvalidDateFormat` for a malformed date and `NotFound` when
    /// no plan has been saved for it.
    pub fn load(&self, date: &str) -> Result<Plan> {
        let date = PlanDate::parse(date)?;
        self.find_date(&date)?
            .ok_or_else(|| PlannerError::NotFound(format!("no plan for {}", date)))
    }

    /// Like `load`, but a missing plan is `Ok(None)`
    pub fn find(&self, date: &str) -> Result<Option<Plan>> {
        let date = PlanDate::parse(date)?;
        self.find_date(&date)
    }

    /// Look up an already validated date
    pub fn find_date(&self, date: &PlanDate) -> Result<Option<Plan>> {
        let path = self.paths.plan_file(date);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let mut plan: Plan =
            serde_json::from_str(&content).map_err(|e| PlannerError::CorruptRecord {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        if plan.date.is_empty() {
            plan.date = date.to_string();
        }
        tracing::debug!("Loaded plan {}", path.display());
        Ok(Some(plan))
    }

    /// The stored plan, or a blank one tagged with the current default category
    pub fn load_or_default(&self, date: &str) -> Result<Plan> {
        let date = PlanDate::parse(date)?;
        match self.find_date(&date)? {
            Some(plan) => Ok(plan),
            None => Ok(Plan::blank(&date, self.tags.default_tag())),
        }
    }

    /// Save the plan for `date`, replacing any previous record.
    ///
    /// The tag is stored as given, even if it is not in the tag set.
    pub fn save(&self, date: &str, content: &str, tag: &str, done: bool) -> Result<Plan> {
        let date = PlanDate::parse(date)?;
        let plan = Plan {
            date: date.to_string(),
            content: content.to_string(),
            tag: tag.to_string(),
            done,
            last_modified: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };

        let path = self.paths.plan_file(&date);
        let serialized = serde_json::to_string_pretty(&plan)?;
        write_atomic(&path, serialized.as_bytes())?;
        tracing::debug!("Saved plan {}", path.display());
        Ok(plan)
    }

    /// Save the plan for `date`, keeping the stored value of every field
    /// passed as `None`.
    ///
    /// With no stored plan the fallbacks are empty content, the default tag
    /// and not done.
    pub fn update(
        &self,
        date: &str,
        content: Option<&str>,
        tag: Option<&str>,
        done: Option<bool>,
    ) -> Result<Plan> {
        let current = self.load_or_default(date)?;
        self.save(
            date,
            content.unwrap_or(&current.content),
            tag.unwrap_or(&current.tag),
            done.unwrap_or(current.done),
        )
    }

    /// Re-save an existing plan with a new done flag
    pub fn set_done(&self, date: &str, done: bool) -> Result<Plan> {
        let plan = self.load(date)?;
        self.save(date, &plan.content, &plan.tag, done)
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tag store implementation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{default_tags, DEFAULT_TAGS};
use crate::error::{PlannerError, Result};
use crate::paths::DataPaths;
use crate::utils::write_atomic;

/// On-disk shape of `tags.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Ordered tag list
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
}

/// Reads and writes the tag set
#[derive(Debug, Clone)]
pub struct TagStore {
    /// Path to the tags record
    tags_path: PathBuf,
}

impl TagStore {
    /// Create a tag store for a data directory
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            tags_path: paths.tags_file(),
        }
    }

    /// Write the default set if no record exists yet
    pub fn initialize(&self) -> Result<()> {
        if self.tags_path.exists() {
            return Ok(());
        }
        tracing::info!("Initializing tags at {}", self.tags_path.display());
        self.save(&default_tags())
    }

    /// Read the record, keeping "absent" and "unreadable" apart.
    ///
    /// Returns `NotFound` when there is no record, `CorruptRecord` when it
    /// cannot be parsed, and `Io` for other read failures.
    pub fn read_record(&self) -> Result<Vec<String>> {
        if !self.tags_path.exists() {
            return Err(PlannerError::NotFound(format!(
                "tags record {}",
                self.tags_path.display()
            )));
        }

        let content = std::fs::read_to_string(&self.tags_path)?;
        let record: TagRecord =
            serde_json::from_str(&content).map_err(|e| PlannerError::CorruptRecord {
                path: self.tags_path.clone(),
                reason: e.to_string(),
            })?;
        Ok(record.tags)
    }

    /// Load the tag set, falling back to the defaults
    pub fn load(&self) -> Vec<String> {
        match self.read_record() {
            Ok(tags) => tags,
            Err(PlannerError::NotFound(_)) => {
                tracing::debug!("No tags record yet, using defaults");
                default_tags()
            }
            Err(e) => {
                tracing::warn!("Unreadable tags record, using defaults: {}", e);
                default_tags()
            }
        }
    }

    /// Overwrite the record with `tags`
    pub fn save(&self, tags: &[String]) -> Result<()> {
        let record = TagRecord {
            tags: tags.to_vec(),
        };
        let content = serde_json::to_string_pretty(&record)?;
        write_atomic(&self.tags_path, content.as_bytes())
    }

    /// Append `new_tag` unless it is blank or already present.
    ///
    /// Returns the resulting set either way. A corrupt record is left on
    /// disk for repair and the add fails with `CorruptRecord`.
    pub fn add(&self, new_tag: &str) -> Result<Vec<String>> {
        let mut tags = match self.read_record() {
            Ok(tags) => tags,
            Err(PlannerError::NotFound(_)) => default_tags(),
            Err(e) => return Err(e),
        };
        if new_tag.trim().is_empty() || tags.iter().any(|t| t == new_tag) {
            return Ok(tags);
        }

        tags.push(new_tag.to_string());
        self.save(&tags)?;
        tracing::info!("Added tag '{}'", new_tag);
        Ok(tags)
    }

    /// Whether `tag` is in the current set
    pub fn is_valid(&self, tag: &str) -> bool {
        self.load().iter().any(|t| t == tag)
    }

    /// The implicit default category: the first tag
    pub fn default_tag(&self) -> String {
        self.load()
            .into_iter()
            .next()
            .unwrap_or_else(|| DEFAULT_TAGS[0].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TagStore) {
        let dir = TempDir::new().unwrap();
        let store = TagStore::new(&DataPaths::new(dir.path()));
        (dir, store)
    }

    #[test]
    fn test_load_without_record_returns_defaults() {
        let (_dir, store) = create_test_store();
        assert_eq!(store.load(), default_tags());
        assert!(store.read_record().unwrap_err().is_not_found());
    }

    #[test]
    fn test_initialize_writes_defaults_once() {
        let (dir, store) = create_test_store();
        store.initialize().unwrap();
        assert_eq!(store.read_record().unwrap(), default_tags());

        store.add("Health").unwrap();
        store.initialize().unwrap();
        assert!(store.load().contains(&"Health".to_string()));

        let raw = std::fs::read_to_string(dir.path().join("tags.json")).unwrap();
        assert!(raw.contains("工作"));
    }

    #[test]
    fn test_corrupt_record_is_distinct_but_falls_back() {
        let (dir, store) = create_test_store();
        std::fs::write(dir.path().join("tags.json"), "{not json").unwrap();

        assert!(matches!(
            store.read_record(),
            Err(PlannerError::CorruptRecord { .. })
        ));
        assert_eq!(store.load(), default_tags());
    }

    #[test]
    fn test_add_refuses_to_replace_corrupt_record() {
        let (dir, store) = create_test_store();
        let path = dir.path().join("tags.json");
        std::fs::write(&path, r#"{"tags": ["Work", "Gym",]}"#).unwrap();

        assert!(matches!(
            store.add("Reading"),
            Err(PlannerError::CorruptRecord { .. })
        ));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"tags": ["Work", "Gym",]}"#
        );
    }

    #[test]
    fn test_record_without_tags_key_uses_defaults() {
        let (dir, store) = create_test_store();
        std::fs::write(dir.path().join("tags.json"), "{}").unwrap();
        assert_eq!(store.load(), default_tags());
    }

    #[test]
    fn test_add_blank_is_noop() {
        let (_dir, store) = create_test_store();
        store.initialize().unwrap();

        assert_eq!(store.add("").unwrap(), default_tags());
        assert_eq!(store.add("  ").unwrap(), default_tags());
        assert_eq!(store.load(), default_tags());
    }

    #[test]
    fn test_add_twice_keeps_one() {
        let (_dir, store) = create_test_store();
        store.initialize().unwrap();

        store.add("Health").unwrap();
        let tags = store.add("Health").unwrap();

        assert_eq!(tags.iter().filter(|t| *t == "Health").count(), 1);
        assert_eq!(tags.last().map(String::as_str), Some("Health"));
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let (_dir, store) = create_test_store();
        store.add("health").unwrap();
        let tags = store.add("Health").unwrap();
        assert!(tags.contains(&"health".to_string()));
        assert!(tags.contains(&"Health".to_string()));
    }

    #[test]
    fn test_external_duplicates_are_preserved() {
        let (dir, store) = create_test_store();
        std::fs::write(
            dir.path().join("tags.json"),
            r#"{"tags": ["A", "A", "B"]}"#,
        )
        .unwrap();
        assert_eq!(store.load(), vec!["A", "A", "B"]);
    }

    #[test]
    fn test_is_valid_and_default_tag() {
        let (_dir, store) = create_test_store();
        assert!(store.is_valid("学习"));
        assert!(!store.is_valid("Nope"));
        assert_eq!(store.default_tag(), "工作");

        store.save(&["Focus".to_string()]).unwrap();
        assert_eq!(store.default_tag(), "Focus");

        store.save(&[]).unwrap();
        assert_eq!(store.default_tag(), "工作");
    }
}

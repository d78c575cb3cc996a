// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Template store implementation

use std::io::ErrorKind;

use crate::error::{PlannerError, Result};
use crate::paths::{DataPaths, TEMPLATE_EXTENSION};
use crate::tags::{TagStore, DEFAULT_TAGS};
use crate::utils::{truncate_chars, write_atomic};

/// Manages named templates grouped by category
#[derive(Debug, Clone)]
pub struct TemplateStore {
    paths: DataPaths,
    tags: TagStore,
}

/// Reject names that would escape their directory
fn validate_component(kind: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlannerError::InvalidInput(format!("{} must not be empty", kind)));
    }
    if value == "." || value == ".." || value.contains(['/', '\\', '\0']) {
        return Err(PlannerError::InvalidInput(format!(
            "{} '{}' must not contain path separators",
            kind, value
        )));
    }
    Ok(())
}

impl TemplateStore {
    /// Create a template store for a data directory
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            paths: paths.clone(),
            tags: TagStore::new(paths),
        }
    }

    /// Template names in `category`, sorted.
    ///
    /// `search` is matched case-insensitively as a substring of the name; an
    /// empty search matches everything. A category with no directory yet
    /// lists nothing.
    pub fn list(&self, category: &str, search: &str) -> Result<Vec<String>> {
        validate_component("Category", category)?;
        let dir = self.paths.template_dir(category);

        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let suffix = format!(".{}", TEMPLATE_EXTENSION);
        let search = search.to_lowercase();
        let mut names = Vec::new();

        for entry in entries {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str().and_then(|f| f.strip_suffix(&suffix)) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            if search.is_empty() || name.to_lowercase().contains(&search) {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Every current category with its templates, in tag order
    pub fn catalog(&self) -> Result<Vec<(String, Vec<String>)>> {
        let mut catalog = Vec::new();
        for category in self.tags.load() {
            let names = match validate_component("Category", &category) {
                Ok(()) => self.list(&category, "")?,
                Err(_) => Vec::new(),
            };
            catalog.push((category, names));
        }
        Ok(catalog)
    }

    /// Read a template's content
    pub fn load(&self, category: &str, name: &str) -> Result<String> {
        validate_component("Category", category)?;
        validate_component("Template name", name)?;
        let path = self.paths.template_file(category, name);

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PlannerError::NotFound(format!(
                "template '{}' in category '{}'",
                name, category
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// The first `max_chars` characters of a template
    pub fn preview(&self, category: &str, name: &str, max_chars: usize) -> Result<String> {
        let content = self.load(category, name)?;
        Ok(truncate_chars(&content, max_chars).to_string())
    }

    /// Write a template, creating the category directory on first use.
    ///
    /// Overwrites a template of the same name. Content is not checked here;
    /// see `import` for the editor path that rejects blank content.
    pub fn save(&self, category: &str, name: &str, content: &str) -> Result<()> {
        validate_component("Category", category)?;
        validate_component("Template name", name)?;

        let dir = self.paths.template_dir(category);
        std::fs::create_dir_all(&dir)?;

        let path = self.paths.template_file(category, name);
        write_atomic(&path, content.as_bytes())?;
        tracing::info!("Saved template '{}' in '{}'", name, category);
        Ok(())
    }

    /// Save editor content as a template.
    ///
    /// Blank content fails with `EmptyContent` before anything is written;
    /// surrounding whitespace is trimmed.
    pub fn import(&self, category: &str, name: &str, content: &str) -> Result<()> {
        let content = content.trim();
        if content.is_empty() {
            return Err(PlannerError::EmptyContent);
        }
        self.save(category, name, content)
    }

    /// Delete a template.
    ///
    /// Returns `false` if there was nothing to delete. The category directory
    /// is kept even when it becomes empty.
    pub fn delete(&self, category: &str, name: &str) -> Result<bool> {
        validate_component("Category", category)?;
        validate_component("Template name", name)?;
        let path = self.paths.template_file(category, name);

        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!("Deleted template '{}' from '{}'", name, category);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Template {} not found, nothing to delete", path.display());
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// `requested` if it is a known category, otherwise the first category
    /// of the current tag set. Callers should adopt the returned value as
    /// their selection.
    pub fn resolve_category(&self, requested: &str) -> String {
        let tags = self.tags.load();
        if tags.iter().any(|t| t == requested) {
            return requested.to_string();
        }
        let fallback = tags
            .into_iter()
            .next()
            .unwrap_or_else(|| DEFAULT_TAGS[0].to_string());
        tracing::debug!(
            "Category '{}' is not a known tag, falling back to '{}'",
            requested,
            fallback
        );
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TemplateStore) {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::new(&DataPaths::new(dir.path()));
        (dir, store)
    }

    #[test]
    fn test_list_missing_category_is_empty() {
        let (_dir, store) = create_test_store();
        assert!(store.list("NoSuchCategory", "").unwrap().is_empty());
    }

    #[test]
    fn test_save_list_delete_cycle() {
        let (dir, store) = create_test_store();

        store.save("Work", "standup", "# Notes").unwrap();
        assert_eq!(store.list("Work", "").unwrap(), vec!["standup"]);

        assert!(store.delete("Work", "standup").unwrap());
        assert!(store.list("Work", "").unwrap().is_empty());

        // Directory is not pruned
        assert!(dir.path().join("templates/Work").is_dir());
    }

    #[test]
    fn test_delete_missing_reports_false() {
        let (_dir, store) = create_test_store();
        assert!(!store.delete("Work", "ghost").unwrap());
    }

    #[test]
    fn test_import_rejects_blank_content() {
        let (dir, store) = create_test_store();

        for blank in ["", "   \n\t"] {
            assert!(matches!(
                store.import("Work", "standup", blank),
                Err(PlannerError::EmptyContent)
            ));
        }
        assert!(!dir.path().join("templates/Work/standup.md").exists());
        assert!(!dir.path().join("templates").exists());
    }

    #[test]
    fn test_import_trims_content() {
        let (_dir, store) = create_test_store();
        store.import("Work", "standup", "\n# Notes\n\n").unwrap();
        assert_eq!(store.load("Work", "standup").unwrap(), "# Notes");
    }

    #[test]
    fn test_save_overwrites_same_name() {
        let (_dir, store) = create_test_store();
        store.save("Work", "standup", "v1").unwrap();
        store.save("Work", "standup", "v2").unwrap();

        assert_eq!(store.load("Work", "standup").unwrap(), "v2");
        assert_eq!(store.list("Work", "").unwrap().len(), 1);
    }

    #[test]
    fn test_list_sorted_filtered_and_md_only() {
        let (dir, store) = create_test_store();
        store.save("Work", "weekly Review", "a").unwrap();
        store.save("Work", "daily", "b").unwrap();
        store.save("Work", "Review-notes", "c").unwrap();
        std::fs::write(dir.path().join("templates/Work/readme.txt"), "x").unwrap();
        std::fs::create_dir(dir.path().join("templates/Work/nested.md")).unwrap();

        assert_eq!(
            store.list("Work", "").unwrap(),
            vec!["Review-notes", "daily", "weekly Review"]
        );
        assert_eq!(
            store.list("Work", "REVIEW").unwrap(),
            vec!["Review-notes", "weekly Review"]
        );
        assert!(store.list("Work", "zzz").unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let (_dir, store) = create_test_store();
        assert!(store.load("Work", "ghost").unwrap_err().is_not_found());
    }

    #[test]
    fn test_preview_truncates_chars() {
        let (_dir, store) = create_test_store();
        store.save("生活", "购物", "牛奶面包鸡蛋").unwrap();
        assert_eq!(store.preview("生活", "购物", 2).unwrap(), "牛奶");
        assert_eq!(store.preview("生活", "购物", 500).unwrap(), "牛奶面包鸡蛋");
    }

    #[test]
    fn test_rejects_path_escapes() {
        let (_dir, store) = create_test_store();
        for (category, name) in [("..", "x"), ("Work", "../x"), ("a/b", "x"), ("Work", " ")] {
            assert!(matches!(
                store.save(category, name, "content"),
                Err(PlannerError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_resolve_category_falls_back() {
        let (dir, store) = create_test_store();
        assert_eq!(store.resolve_category("学习"), "学习");
        assert_eq!(store.resolve_category("Nope"), "工作");

        TagStore::new(&DataPaths::new(dir.path()))
            .save(&["Focus".to_string()])
            .unwrap();
        assert_eq!(store.resolve_category("学习"), "Focus");
    }

    #[test]
    fn test_catalog_follows_tag_order() {
        let (_dir, store) = create_test_store();
        store.save("生活", "购物", "x").unwrap();
        store.save("Orphan", "kept", "x").unwrap();

        let catalog = store.catalog().unwrap();
        let categories: Vec<_> = catalog.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(categories, vec!["工作", "学习", "生活", "其他"]);
        assert_eq!(catalog[2].1, vec!["购物"]);
        assert!(catalog[0].1.is_empty());
    }
}

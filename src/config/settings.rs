// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for the planner
//!
//! Handles loading and saving settings from `<data dir>/settings.json`.
//! Every section falls back to its defaults, so a missing file or a file
//! written by an older version both load cleanly.

use serde::{Deserialize, Serialize};

use crate::templates::DEFAULT_PREVIEW_CHARS;

mod io;
mod validation;

/// Main settings structure, stored in `<data dir>/settings.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Daily reminder settings
    #[serde(default)]
    pub reminder: ReminderConfig,

    /// Backup settings
    #[serde(default)]
    pub backup: BackupConfig,

    /// Template library settings
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Daily reminder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Whether `remind run` should start the scheduler
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Trigger hour, local time (0-23)
    #[serde(default = "default_reminder_hour")]
    pub hour: u32,

    /// Trigger minute (0-59)
    #[serde(default)]
    pub minute: u32,

    /// Seconds between wake-ups
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Show desktop notifications instead of logging them.
    /// Requires the `desktop-notify` feature.
    #[serde(default)]
    pub desktop: bool,
}

/// Backup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BackupConfig {
    /// Write archives to a `.partial` file and rename when complete
    #[serde(default)]
    pub atomic: bool,
}

/// Template library configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Characters shown by `template show --preview`
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_true() -> bool {
    true
}

fn default_reminder_hour() -> u32 {
    9
}

fn default_poll_interval_secs() -> u64 {
    60
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            hour: default_reminder_hour(),
            minute: 0,
            poll_interval_secs: default_poll_interval_secs(),
            desktop: false,
        }
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            preview_chars: default_preview_chars(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reminder_config_default() {
        let config = ReminderConfig::default();
        assert!(config.enabled);
        assert_eq!(config.hour, 9);
        assert_eq!(config.minute, 0);
        assert_eq!(config.poll_interval_secs, 60);
        assert!(!config.desktop);
    }

    #[test]
    fn test_backup_and_templates_default() {
        let settings = Settings::default();
        assert!(!settings.backup.atomic);
        assert_eq!(settings.templates.preview_chars, 500);
    }

    #[test]
    fn test_settings_load_from_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.reminder.hour = 7;
        settings.reminder.minute = 30;
        settings.backup.atomic = true;

        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_settings_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        Settings::default().save_to(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_settings_partial_json() {
        let json = r#"{"reminder": {"hour": 8}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.reminder.hour, 8);
        assert_eq!(settings.reminder.poll_interval_secs, 60);
        assert!(settings.reminder.enabled);
        assert_eq!(settings.templates.preview_chars, 500);
    }

    #[test]
    fn test_settings_corrupt_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }
}

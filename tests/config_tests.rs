// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use tempfile::TempDir;

use daily_planner::config::Settings;
use daily_planner::error::PlannerError;

#[test]
fn test_missing_settings_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_partial_settings_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"reminder": {"hour": 21}}"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.reminder.hour, 21);
    assert_eq!(settings.reminder.minute, 0);
    assert!(settings.reminder.enabled);
    assert!(!settings.backup.atomic);
    assert_eq!(settings.templates.preview_chars, 500);
}

#[test]
fn test_out_of_range_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"reminder": {"minute": 75}}"#).unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, PlannerError::Config(_)));
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.set_value("backup.atomic", "true").unwrap();
    settings.set_value("templates.preview_chars", "120").unwrap();
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert!(loaded.backup.atomic);
    assert_eq!(loaded.templates.preview_chars, 120);
}

#[test]
fn test_set_value_rejects_unknown_key_and_bad_value() {
    let mut settings = Settings::default();
    assert!(settings.set_value("reminder.colour", "blue").is_err());
    assert!(settings.set_value("reminder.hour", "nine").is_err());
    assert!(settings.set_value("reminder.hour", "24").is_err());
    assert_eq!(settings, Settings::default());
}

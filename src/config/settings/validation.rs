// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{PlannerError, Result};

use super::Settings;

impl Settings {
    /// Reject values the scheduler and stores cannot work with.
    pub fn validate(&self) -> Result<()> {
        let reminder = &self.reminder;
        if reminder.hour > 23 {
            return Err(PlannerError::Config(format!(
                "reminder.hour must be 0-23, got {}",
                reminder.hour
            )));
        }
        if reminder.minute > 59 {
            return Err(PlannerError::Config(format!(
                "reminder.minute must be 0-59, got {}",
                reminder.minute
            )));
        }
        if reminder.poll_interval_secs == 0 {
            return Err(PlannerError::Config(
                "reminder.poll_interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.templates.preview_chars == 0 {
            return Err(PlannerError::Config(
                "templates.preview_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply a `key = value` change from the command line.
    ///
    /// Leaves the settings untouched if the key is unknown or the result
    /// would not validate.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
            value.parse().map_err(|_| {
                PlannerError::InvalidInput(format!("Invalid value '{}' for {}", value, key))
            })
        }

        let mut updated = self.clone();
        match key {
            "reminder.enabled" => updated.reminder.enabled = parse(key, value)?,
            "reminder.hour" => updated.reminder.hour = parse(key, value)?,
            "reminder.minute" => updated.reminder.minute = parse(key, value)?,
            "reminder.poll_interval_secs" => updated.reminder.poll_interval_secs = parse(key, value)?,
            "reminder.desktop" => updated.reminder.desktop = parse(key, value)?,
            "backup.atomic" => updated.backup.atomic = parse(key, value)?,
            "templates.preview_chars" => updated.templates.preview_chars = parse(key, value)?,
            _ => {
                return Err(PlannerError::InvalidInput(format!(
                    "Unknown setting '{}'",
                    key
                )))
            }
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut settings = Settings::default();
        settings.reminder.hour = 24;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.reminder.minute = 60;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.reminder.poll_interval_secs = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_set_value() {
        let mut settings = Settings::default();
        settings.set_value("reminder.hour", "7").unwrap();
        settings.set_value("backup.atomic", "true").unwrap();
        assert_eq!(settings.reminder.hour, 7);
        assert!(settings.backup.atomic);

        assert!(settings.set_value("reminder.hour", "25").is_err());
        assert!(settings.set_value("reminder.hour", "soon").is_err());
        assert!(settings.set_value("nope", "1").is_err());
    }
}

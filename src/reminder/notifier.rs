// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Notification sinks

use std::sync::Arc;

use crate::config::ReminderConfig;

/// Delivers a notification. Delivery is best effort and never reports back.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str);
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, body: &str) {
        tracing::info!(target: "planner.reminder", "{}: {}", title, body);
    }
}

/// Shows notifications on the desktop
#[cfg(feature = "desktop-notify")]
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
}

#[cfg(feature = "desktop-notify")]
impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

#[cfg(feature = "desktop-notify")]
impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new("daily-planner")
    }
}

#[cfg(feature = "desktop-notify")]
impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        let result = notify_rust::Notification::new()
            .summary(title)
            .body(body)
            .appname(&self.app_name)
            .timeout(notify_rust::Timeout::Milliseconds(10_000))
            .show();
        if let Err(e) = result {
            tracing::warn!(target: "planner.reminder", "Desktop notification failed: {}", e);
        }
    }
}

/// Pick the notifier the settings ask for.
///
/// Falls back to the log when desktop support is not compiled in.
pub fn notifier_for(config: &ReminderConfig) -> Arc<dyn Notifier> {
    #[cfg(feature = "desktop-notify")]
    {
        if config.desktop {
            return Arc::new(DesktopNotifier::default());
        }
    }

    if config.desktop {
        tracing::warn!(
            target: "planner.reminder",
            "Desktop notifications requested but not compiled in; logging instead"
        );
    }
    Arc::new(LogNotifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_notifier_does_not_panic() {
        LogNotifier.notify("title", "body");
    }

    #[test]
    fn test_notifier_for_default_config() {
        let notifier = notifier_for(&ReminderConfig::default());
        notifier.notify("title", "body");
    }
}

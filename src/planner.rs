// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Startup wiring for the stores

use std::sync::Arc;

use crate::backup::BackupArchiver;
use crate::config::Settings;
use crate::error::Result;
use crate::paths::DataPaths;
use crate::plans::PlanStore;
use crate::reminder::{notifier_for, Notifier, ReminderScheduler};
use crate::tags::TagStore;
use crate::templates::TemplateStore;

/// All stores over one initialized data directory
#[derive(Debug, Clone)]
pub struct Planner {
    pub paths: DataPaths,
    pub settings: Settings,
    pub tags: TagStore,
    pub plans: PlanStore,
    pub templates: TemplateStore,
    pub backups: BackupArchiver,
}

impl Planner {
    /// Initialize the data directory and open every store.
    ///
    /// Fails with `DirectoryInit` if the directory tree cannot be created;
    /// nothing else is usable in that case. An unreadable or invalid
    /// settings file is replaced by the defaults in memory and left on disk
    /// until the next `Settings::save`.
    pub fn open(paths: DataPaths) -> Result<Self> {
        paths.ensure_directories()?;

        let tags = TagStore::new(&paths);
        tags.initialize()?;

        let settings = match Settings::load(&paths) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    "Unusable settings file {}, using defaults: {}",
                    paths.settings_file().display(),
                    e
                );
                Settings::default()
            }
        };
        let backups = BackupArchiver::new(&paths).with_atomic(settings.backup.atomic);

        tracing::debug!("Opened data directory {}", paths.root().display());
        Ok(Self {
            plans: PlanStore::new(&paths),
            templates: TemplateStore::new(&paths),
            tags,
            backups,
            settings,
            paths,
        })
    }

    /// A reminder scheduler configured from the settings
    pub fn reminder_scheduler(&self) -> ReminderScheduler {
        ReminderScheduler::from_config(
            self.plans.clone(),
            notifier_for(&self.settings.reminder),
            &self.settings.reminder,
        )
    }

    /// Same as `reminder_scheduler`, with a specific notifier
    pub fn reminder_scheduler_with(&self, notifier: Arc<dyn Notifier>) -> ReminderScheduler {
        ReminderScheduler::from_config(self.plans.clone(), notifier, &self.settings.reminder)
    }
}

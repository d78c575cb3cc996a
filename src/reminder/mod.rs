// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Daily reminder
//!
//! A background thread wakes once per polling interval. When the local time
//! hits the trigger (09:00 by default) it reads today's plan and sends one
//! notification:
//!
//! | Today's plan        | Notification                        |
//! |---------------------|-------------------------------------|
//! | no record           | asks the user to write a plan       |
//! | non-blank content   | shows the content                   |
//! | blank content       | says the plan is empty              |
//!
//! The scheduler only reads plans. Notifications are fire-and-forget through
//! a [`Notifier`].

pub mod notifier;
pub mod scheduler;

pub use notifier::{notifier_for, LogNotifier, Notifier};
#[cfg(feature = "desktop-notify")]
pub use notifier::DesktopNotifier;
pub use scheduler::{
    Clock, Reminder, ReminderHandle, ReminderScheduler, SchedulerState, SystemClock, TriggerTime,
};

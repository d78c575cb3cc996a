// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Background reminder scheduler.
//!
//! The scheduler is an explicit service: `start()` spawns the polling thread
//! and hands back a [`ReminderHandle`]; `stop()` (or dropping the handle)
//! wakes the thread and ends it. Only one polling thread may run per
//! scheduler at a time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

use super::Notifier;
use crate::config::ReminderConfig;
use crate::error::{PlannerError, Result};
use crate::plans::{Plan, PlanDate, PlanStore};

const TITLE_DAILY: &str = "每日计划提醒";
const TITLE_TODAY: &str = "今日计划提醒";
const BODY_MISSING: &str = "今天是新的一天！请填写今天的计划";
const BODY_PLANNED_PREFIX: &str = "您今天有以下计划:\n";
const BODY_EMPTY: &str = "今天的计划是空的，请补充";

/// Source of local wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The system's local time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Time of day at which the reminder fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerTime {
    pub hour: u32,
    pub minute: u32,
}

impl Default for TriggerTime {
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

impl TriggerTime {
    /// Whether `now` falls inside the trigger minute
    pub fn matches(&self, now: NaiveDateTime) -> bool {
        now.hour() == self.hour && now.minute() == self.minute
    }
}

/// What today's plan looks like at reminder time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reminder {
    /// No plan saved for today
    Missing,
    /// A plan with content
    Planned(String),
    /// A plan whose content is blank
    Empty,
}

impl Reminder {
    /// Classify today's plan
    pub fn for_plan(plan: Option<&Plan>) -> Self {
        match plan {
            None => Reminder::Missing,
            Some(plan) if plan.is_blank() => Reminder::Empty,
            Some(plan) => Reminder::Planned(plan.content.clone()),
        }
    }

    /// Notification title
    pub fn title(&self) -> &'static str {
        match self {
            Reminder::Planned(_) => TITLE_TODAY,
            Reminder::Missing | Reminder::Empty => TITLE_DAILY,
        }
    }

    /// Notification body
    pub fn body(&self) -> String {
        match self {
            Reminder::Missing => BODY_MISSING.to_string(),
            Reminder::Planned(content) => format!("{}{}", BODY_PLANNED_PREFIX, content),
            Reminder::Empty => BODY_EMPTY.to_string(),
        }
    }
}

/// Scheduler state as seen from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Waiting for the next wake-up
    Idle,
    /// Evaluating today's plan
    Checking,
}

struct Inner {
    plans: PlanStore,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    trigger: TriggerTime,
    poll_interval: Duration,
    running: AtomicBool,
    checking: AtomicBool,
    last_fired: Mutex<Option<NaiveDate>>,
}

impl Inner {
    fn remind(&self, date: &PlanDate) -> Result<Reminder> {
        let plan = self.plans.find_date(date)?;
        let reminder = Reminder::for_plan(plan.as_ref());
        self.notifier.notify(reminder.title(), &reminder.body());
        Ok(reminder)
    }

    /// One wake-up: fire if the trigger minute has come and today has not
    /// fired yet.
    fn tick(&self) -> Option<Reminder> {
        let now = self.clock.now();
        if !self.trigger.matches(now) {
            return None;
        }

        let today = now.date();
        {
            let mut last = self.last_fired.lock().unwrap_or_else(|e| e.into_inner());
            if *last == Some(today) {
                return None;
            }
            *last = Some(today);
        }

        self.checking.store(true, Ordering::SeqCst);
        let result = self.remind(&PlanDate::from(today));
        self.checking.store(false, Ordering::SeqCst);

        match result {
            Ok(reminder) => {
                tracing::debug!(target: "planner.reminder", "Sent reminder for {}", today);
                Some(reminder)
            }
            Err(e) => {
                tracing::warn!(target: "planner.reminder", "Reminder check failed: {}", e);
                None
            }
        }
    }
}

/// Polls today's plan and sends the daily reminder
#[derive(Clone)]
pub struct ReminderScheduler {
    inner: Arc<Inner>,
}

impl ReminderScheduler {
    /// Build a scheduler around an explicit clock, trigger and polling interval
    pub fn new(
        plans: PlanStore,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        trigger: TriggerTime,
        poll_interval: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                plans,
                notifier,
                clock,
                trigger,
                poll_interval,
                running: AtomicBool::new(false),
                checking: AtomicBool::new(false),
                last_fired: Mutex::new(None),
            }),
        }
    }

    /// Build a scheduler on the system clock from reminder settings
    pub fn from_config(
        plans: PlanStore,
        notifier: Arc<dyn Notifier>,
        config: &ReminderConfig,
    ) -> Self {
        Self::new(
            plans,
            notifier,
            Arc::new(SystemClock),
            TriggerTime {
                hour: config.hour,
                minute: config.minute,
            },
            Duration::from_secs(config.poll_interval_secs),
        )
    }

    /// The configured trigger time
    pub fn trigger(&self) -> TriggerTime {
        self.inner.trigger
    }

    /// Whether the polling thread is running
    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    /// Current state
    pub fn state(&self) -> SchedulerState {
        if self.inner.checking.load(Ordering::SeqCst) {
            SchedulerState::Checking
        } else {
            SchedulerState::Idle
        }
    }

    /// Check `date` right away, ignoring the trigger time
    pub fn remind(&self, date: &PlanDate) -> Result<Reminder> {
        self.inner.remind(date)
    }

    /// Run a single wake-up as the polling thread would
    pub fn tick(&self) -> Option<Reminder> {
        self.inner.tick()
    }

    /// Spawn the polling thread.
    ///
    /// Fails with `AlreadyRunning` if this scheduler already has one.
    pub fn start(&self) -> Result<ReminderHandle> {
        if self.inner.running.swap(true, Ordering::SeqCst) {
            return Err(PlannerError::AlreadyRunning);
        }

        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let inner = Arc::clone(&self.inner);

        let spawned = thread::Builder::new()
            .name("planner-reminder".to_string())
            .spawn(move || {
                tracing::debug!(
                    target: "planner.reminder",
                    "Reminder thread started, trigger {:02}:{:02}",
                    inner.trigger.hour,
                    inner.trigger.minute
                );
                loop {
                    inner.tick();
                    match shutdown_rx.recv_timeout(inner.poll_interval) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                inner.running.store(false, Ordering::SeqCst);
                tracing::debug!(target: "planner.reminder", "Reminder thread stopped");
            });

        match spawned {
            Ok(thread) => Ok(ReminderHandle {
                thread: Some(thread),
                shutdown_tx,
            }),
            Err(e) => {
                self.inner.running.store(false, Ordering::SeqCst);
                Err(e.into())
            }
        }
    }
}

/// Handle to a running reminder thread
pub struct ReminderHandle {
    thread: Option<JoinHandle<()>>,
    shutdown_tx: Sender<()>,
}

impl ReminderHandle {
    /// Stop the thread and wait for it to finish
    pub fn stop(mut self) -> Result<()> {
        let _ = self.shutdown_tx.send(());
        self.join_thread()
    }

    /// Block until the thread ends. Without a `stop` from elsewhere this
    /// runs for the life of the process.
    pub fn wait(mut self) -> Result<()> {
        self.join_thread()
    }

    fn join_thread(&mut self) -> Result<()> {
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| PlannerError::Config("Reminder thread panicked".into()))?;
        }
        Ok(())
    }
}

impl Drop for ReminderHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(());
    }
}

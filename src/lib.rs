// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Daily planner - file-backed plans, tags, templates and backups.
//!
//! This crate exposes the storage engine used by the `planner` CLI
//! (`src/main.rs`). Everything lives under one data directory and every read
//! goes back to disk; there is no in-memory source of truth.
//!
//! Layout:
//! - `paths`: where each record lives under the data directory
//! - `tags`: the ordered category set (`tags.json`)
//! - `plans`: one JSON record per calendar date
//! - `templates`: Markdown snippets grouped by category directory
//! - `backup`: zip snapshots of the data directory
//! - `reminder`: background thread that sends the 09:00 notification
//! - `preview`: HTML preview around a pluggable Markdown formatter
//! - `planner`: startup wiring that initializes the directory and opens
//!   the stores

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod paths;
pub mod planner;
pub mod plans;
pub mod preview;
pub mod reminder;
pub mod tags;
pub mod templates;
pub mod utils;

pub use error::{PlannerError, Result};
pub use planner::Planner;

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tag (category) management
//!
//! Tags classify both plans and templates. The set lives in a single
//! `tags.json` record shaped as `{"tags": [...]}`.
//!
//! ## Rules
//! - First run writes the four built-in defaults
//! - Insertion order is preserved; the first tag is the default category
//! - Adding checks membership first, but a hand-edited file may still hold
//!   duplicates and is returned as-is
//! - A missing or unreadable record never fails a load: the defaults are
//!   returned instead

pub mod store;

pub use store::{TagRecord, TagStore};

/// Built-in categories written on first run
pub const DEFAULT_TAGS: [&str; 4] = ["工作", "学习", "生活", "其他"];

/// The built-in default set as owned strings
pub fn default_tags() -> Vec<String> {
    DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()
}

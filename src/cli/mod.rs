// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI module for the planner
//!
//! Handles command-line argument parsing. Dispatch lives in the binary.

pub mod args;

pub use args::*;

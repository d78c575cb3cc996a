// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Data directory backups
//!
//! A backup is a zip of the whole data directory, written to
//! `backups/backup_{YYYYmmdd_HHMMSS}.zip`. Files whose name starts with
//! `backup_` are skipped, so earlier archives never end up inside newer
//! ones. Backups are write-only; there is no restore.
//!
//! Two backups in the same second share a name and the second one wins.

pub mod archiver;

pub use archiver::BackupArchiver;

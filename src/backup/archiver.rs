// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Backup archive writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{PlannerError, Result};
use crate::paths::{DataPaths, BACKUP_PREFIX};

/// Snapshots the data directory into zip archives
#[derive(Debug, Clone)]
pub struct BackupArchiver {
    paths: DataPaths,
    /// Write to a `.partial` file and rename once complete
    atomic: bool,
}

fn is_backup_file(name: &str) -> bool {
    name.starts_with(BACKUP_PREFIX)
}

/// Archive entry name: root-relative, `/`-separated
fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        PlannerError::Archive(format!(
            "{} is outside the data directory",
            path.display()
        ))
    })?;
    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/"))
}

impl BackupArchiver {
    /// Create an archiver for a data directory.
    ///
    /// Archives are written in place by default, so a failure part way
    /// through can leave a partial archive behind.
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            paths: paths.clone(),
            atomic: false,
        }
    }

    /// Only publish an archive once it is fully written
    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Create a backup named after the current local time
    pub fn create_backup(&self) -> Result<PathBuf> {
        self.create_backup_at(Local::now().naive_local())
    }

    /// Create a backup named after `timestamp`
    pub fn create_backup_at(&self, timestamp: NaiveDateTime) -> Result<PathBuf> {
        std::fs::create_dir_all(self.paths.backup_dir())?;
        let target = self.paths.backup_file(timestamp);

        let write_path = if self.atomic {
            let mut name = target.as_os_str().to_os_string();
            name.push(".partial");
            PathBuf::from(name)
        } else {
            target.clone()
        };

        let files = self.write_archive(&write_path)?;
        if self.atomic {
            std::fs::rename(&write_path, &target)?;
        }

        tracing::info!("Backed up {} files to {}", files, target.display());
        Ok(target)
    }

    fn write_archive(&self, write_path: &Path) -> Result<usize> {
        let root = self.paths.root();
        let file = File::create(write_path)?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        let mut count = 0;

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if is_backup_file(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let name = entry_name(root, entry.path())?;
            tracing::debug!("Adding {} to backup", name);
            let options =
                SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
            zip.start_file(name, options)?;
            let mut source = File::open(entry.path())?;
            std::io::copy(&mut source, &mut zip)?;
            count += 1;
        }

        let mut writer = zip.finish()?;
        writer.flush()?;
        Ok(count)
    }

    /// Existing backup archives, oldest first
    pub fn list_backups(&self) -> Result<Vec<PathBuf>> {
        let dir = self.paths.backup_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups: Vec<PathBuf> = std::fs::read_dir(&dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| is_backup_file(n) && n.ends_with(".zip"))
                    .unwrap_or(false)
            })
            .collect();
        backups.sort();
        Ok(backups)
    }
}

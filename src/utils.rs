// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Utility functions shared by the stores and the CLI

use std::path::Path;

use crate::error::{PlannerError, Result};

/// Archive size for listings, e.g. `812 B` or `14.2 KB`
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Replace `path` with `contents` via a sibling temp file and a rename.
///
/// Readers see either the old record or the new one, never a truncated file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| PlannerError::InvalidInput(format!("Not a file path: {}", path.display())))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    std::fs::write(&temp_path, contents)?;
    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}

/// First `max_chars` characters of `text` (not bytes)
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Format an error for display to the user
pub fn format_error(error: &PlannerError) -> String {
    match error {
        PlannerError::InvalidDateFormat(date) => format!(
            "Error: '{}' is not a valid date. Use the YYYY-MM-DD format, e.g. 2024-01-01.",
            date
        ),
        PlannerError::EmptyContent => {
            "Error: the content is empty, so no template was created.".to_string()
        }
        _ => format!("Error: {}", error),
    }
}

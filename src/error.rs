// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for the planner
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// A date string that is not a canonical `YYYY-MM-DD` calendar date
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// A requested plan or template does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Template creation from blank content
    #[error("Content is empty, nothing to save as a template")]
    EmptyContent,

    /// The data directory tree could not be created at startup
    #[error("Failed to initialize data directory {path}: {source}")]
    DirectoryInit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record exists but could not be parsed
    #[error("Corrupt record {path}: {reason}")]
    CorruptRecord { path: PathBuf, reason: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backup archive errors
    #[error("Archive error: {0}")]
    Archive(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The reminder scheduler was started twice
    #[error("Reminder scheduler is already running")]
    AlreadyRunning,
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

impl From<zip::result::ZipError> for PlannerError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => PlannerError::Io(io),
            other => PlannerError::Archive(other.to_string()),
        }
    }
}

impl From<walkdir::Error> for PlannerError {
    fn from(err: walkdir::Error) -> Self {
        let message = err.to_string();
        match err.into_io_error() {
            Some(io) => PlannerError::Io(io),
            None => PlannerError::Archive(message),
        }
    }
}

impl PlannerError {
    /// Whether this error means "the record simply isn't there yet"
    pub fn is_not_found(&self) -> bool {
        matches!(self, PlannerError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_format_display() {
        let err = PlannerError::InvalidDateFormat("2024/13/40".to_string());
        assert!(err.to_string().contains("2024/13/40"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_not_found_display() {
        let err = PlannerError::NotFound("plan for 2024-01-01".to_string());
        assert_eq!(err.to_string(), "Not found: plan for 2024-01-01");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_empty_content_display() {
        let err = PlannerError::EmptyContent;
        assert!(err.to_string().contains("empty"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_directory_init_keeps_source() {
        let err = PlannerError::DirectoryInit {
            path: PathBuf::from("/nope"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/nope"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PlannerError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_from_zip_io_unwraps() {
        let zip_err = zip::result::ZipError::Io(std::io::Error::other("disk full"));
        let err: PlannerError = zip_err.into();
        assert!(matches!(err, PlannerError::Io(_)));
    }

    #[test]
    fn test_from_zip_other() {
        let err: PlannerError = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, PlannerError::Archive(_)));
    }

    #[test]
    fn test_already_running_debug() {
        let debug_str = format!("{:?}", PlannerError::AlreadyRunning);
        assert!(debug_str.contains("AlreadyRunning"));
    }

    #[test]
    fn test_result_error() {
        fn test_fn() -> Result<i32> {
            Err(PlannerError::InvalidInput("test".to_string()))
        }

        assert!(test_fn().is_err());
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Validated plan dates
//!
//! A plan's date doubles as its storage key, so only the canonical
//! zero-padded `YYYY-MM-DD` spelling is accepted. `2024-1-5` parses as a
//! calendar date but would name a different file than `2024-01-05`, so it
//! is rejected too.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::error::{PlannerError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date in canonical `YYYY-MM-DD` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanDate(NaiveDate);

impl PlanDate {
    /// Parse a canonical date string
    pub fn parse(input: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map_err(|_| PlannerError::InvalidDateFormat(input.to_string()))?;
        if date.format(DATE_FORMAT).to_string() != input {
            return Err(PlannerError::InvalidDateFormat(input.to_string()));
        }
        Ok(Self(date))
    }

    /// Today in local time
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The underlying calendar date
    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for PlanDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for PlanDate {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PlanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

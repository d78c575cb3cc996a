// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use chrono::NaiveDate;
use proptest::prelude::*;
use tempfile::TempDir;

use daily_planner::paths::DataPaths;
use daily_planner::plans::{PlanDate, PlanStore};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_calendar_dates_are_canonical(days in 0i64..80_000) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(days);
        let text = date.format("%Y-%m-%d").to_string();
        let parsed = PlanDate::parse(&text).unwrap();
        prop_assert_eq!(parsed.naive(), date);
        prop_assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn prop_unpadded_dates_are_rejected(month in 1u32..10, day in 1u32..10) {
        let text = format!("2024-{}-{}", month, day);
        prop_assert!(PlanDate::parse(&text).is_err());
    }

    #[test]
    fn prop_saved_content_is_stored_verbatim(
        days in 0i64..80_000,
        content in "\\PC{0,200}",
        tag in "[a-z]{1,8}",
        done in any::<bool>(),
    ) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(days);
        let key = date.format("%Y-%m-%d").to_string();
        let dir = TempDir::new().unwrap();
        let store = PlanStore::new(&DataPaths::new(dir.path()));

        store.save(&key, &content, &tag, done).unwrap();
        let plan = store.load(&key).unwrap();
        prop_assert_eq!(plan.date, key);
        prop_assert_eq!(plan.content, content);
        prop_assert_eq!(plan.tag, tag);
        prop_assert_eq!(plan.done, done);
    }
}

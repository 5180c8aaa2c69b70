//! Tests for the aggregation engine

use chrono::NaiveDate;

mod running_stat_tests;

/// Shorthand for building report dates in tests
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

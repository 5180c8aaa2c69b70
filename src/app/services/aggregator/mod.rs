//! Incremental aggregation engine for validated contributions
//!
//! Two tables share one update rule but differ in how they report:
//!
//! - [`zip::ZipAggregator`] keys on (recipient, zip prefix) and returns a
//!   report line on every update, so output streams in input order.
//! - [`date::DateAggregator`] keys on (recipient, date) and reports the
//!   whole table once, sorted, after the input is exhausted.
//!
//! Both hold a [`running_stat::RunningStat`] per key: count, exact total
//! and a "median" that is the running mean rounded half up.
//!
//! # Example Usage
//!
//! ```rust
//! use political_donors::app::services::aggregator::{DateAggregator, ZipAggregator};
//! use chrono::NaiveDate;
//!
//! # fn example() -> political_donors::Result<()> {
//! let mut by_zip = ZipAggregator::new();
//! assert_eq!(by_zip.update("C001", "12345", 100)?, "C001|12345|100|1|100\n");
//! assert_eq!(by_zip.update("C001", "12345", 200)?, "C001|12345|150|2|300\n");
//!
//! let mut by_date = DateAggregator::new();
//! let date = NaiveDate::from_ymd_opt(2016, 10, 1).unwrap();
//! by_date.update("C001", date, 100)?;
//! assert_eq!(by_date.finalize(), vec!["C001|10012016|100|1|100\n".to_string()]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod date;
pub mod running_stat;
pub mod zip;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use date::DateAggregator;
pub use running_stat::{RunningStat, rounded_mean};
pub use zip::ZipAggregator;

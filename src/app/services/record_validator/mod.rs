//! Record validator for FEC individual contribution lines
//!
//! Splits a pipe-delimited line into its fixed-position fields and decides
//! whether the record takes part in aggregation at all, and if so whether
//! it feeds the zip report, the date report, or both.
//!
//! ## Architecture
//!
//! - [`validator`] - Line tokenizing and the per-line decision
//! - [`field_validators`] - Checks on individual field values
//! - [`stats`] - Counters for accepted and rejected lines
//!
//! ## Usage
//!
//! ```rust
//! use political_donors::app::models::LineOutcome;
//! use political_donors::app::services::record_validator::RecordValidator;
//!
//! let mut validator = RecordValidator::default();
//! let line = "C00629618|N|TER|P|201701230300133512|15C|IND|PEREZ, JOHN A|LOS ANGELES|CA|90017|PRINCIPAL|DOUBLE NICKEL ADVISORS|01032017|40|H6CA34245|SA01251735122|1141239|||2012520171368850783";
//!
//! match validator.validate_line(1, line) {
//!     LineOutcome::Ineligible(reason) => println!("skipped: {}", reason),
//!     other => println!("{:?}", other),
//! }
//! ```

pub mod field_validators;
pub mod stats;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use stats::ValidationStats;
pub use validator::RecordValidator;

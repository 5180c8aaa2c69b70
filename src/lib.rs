//! Political Donors Library
//!
//! Streaming aggregation over FEC individual contribution files.
//!
//! This library provides tools for:
//! - Validating pipe-delimited contribution records field by field
//! - Running median, count and total per recipient and zip prefix, emitted
//!   as each record arrives
//! - Median, count and total per recipient and date, emitted once at the
//!   end, sorted by recipient then date
//! - Writing both reports without ever overwriting an existing file

pub mod config;
pub mod constants;
pub mod error;
pub mod processor;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod record_validator;
        pub mod report_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Contribution, DateKey, ZipKey};
pub use config::Config;
pub use error::{Error, Result};
pub use processor::{ContributionProcessor, ProcessingStats};

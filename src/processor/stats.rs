//! Run statistics for the contribution processor

use crate::app::services::record_validator::ValidationStats;
use serde::Serialize;
use std::time::Duration;

/// Outcome of a complete processing run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessingStats {
    /// Per-line validation counters
    pub validation: ValidationStats,
    /// Lines appended to the zip report
    pub zip_lines_written: usize,
    /// Lines in the final date report
    pub date_lines_written: usize,
    /// Distinct (recipient, zip) groups
    pub zip_groups: usize,
    /// Distinct (recipient, date) groups
    pub date_groups: usize,
    /// Accepted lines whose recipient or zip was not valid UTF-8
    pub lossy_reported_lines: usize,
    pub processing_time: Duration,
}

impl ProcessingStats {
    /// Lines per second over the whole run
    pub fn throughput(&self) -> f64 {
        let seconds = self.processing_time.as_secs_f64();
        if seconds == 0.0 {
            0.0
        } else {
            self.validation.lines_read as f64 / seconds
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} lines read | {} accepted ({:.1}%) | \
             {} ineligible | {} malformed | zip: {} lines in {} groups | \
             date: {} lines",
            self.validation.lines_read,
            self.validation.accepted,
            self.validation.acceptance_rate(),
            self.validation.ineligible(),
            self.validation.malformed_lines,
            self.zip_lines_written,
            self.zip_groups,
            self.date_lines_written
        )
    }
}

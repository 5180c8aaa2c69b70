//! Validation statistics for the record validator
//!
//! Tracks how many lines were read and why lines were filtered out, so a
//! run can report what fraction of the input fed each report.

use crate::app::models::{IneligibleReason, LineOutcome};
use serde::Serialize;

/// Counters for lines seen by the validator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationStats {
    /// Total number of lines read
    pub lines_read: usize,

    /// Lines whose field count did not match the layout
    pub malformed_lines: usize,

    /// Well-formed lines accepted for at least the shared checks
    pub accepted: usize,

    pub missing_recipient: usize,
    pub invalid_amount: usize,
    pub entity_contributions: usize,

    /// Accepted records with a usable zip prefix
    pub zip_eligible: usize,

    /// Accepted records with a valid transaction date
    pub date_eligible: usize,
}

impl ValidationStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one validated line
    pub fn record(&mut self, outcome: &LineOutcome) {
        self.lines_read += 1;

        match outcome {
            LineOutcome::Accepted(contribution) => {
                self.accepted += 1;
                if contribution.is_zip_eligible() {
                    self.zip_eligible += 1;
                }
                if contribution.is_date_eligible() {
                    self.date_eligible += 1;
                }
            }
            LineOutcome::Ineligible(reason) => match reason {
                IneligibleReason::MissingRecipient => self.missing_recipient += 1,
                IneligibleReason::InvalidAmount => self.invalid_amount += 1,
                IneligibleReason::EntityContribution => self.entity_contributions += 1,
            },
            LineOutcome::Malformed { .. } => self.malformed_lines += 1,
        }
    }

    /// Well-formed lines rejected by the shared checks
    pub fn ineligible(&self) -> usize {
        self.missing_recipient + self.invalid_amount + self.entity_contributions
    }

    /// Accepted lines as a percentage of lines read
    pub fn acceptance_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.accepted as f64 / self.lines_read as f64) * 100.0
        }
    }
}

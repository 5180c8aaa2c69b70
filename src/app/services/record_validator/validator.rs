//! Line tokenizing and eligibility decisions

use tracing::trace;

use super::field_validators::{check_contribution, parse_transaction_date, zip_prefix};
use super::stats::ValidationStats;
use crate::app::models::{Contribution, LineOutcome};
use crate::config::FieldLayout;

/// Turns raw input lines into validated contributions
#[derive(Debug, Clone)]
pub struct RecordValidator {
    layout: FieldLayout,
    stats: ValidationStats,
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new(FieldLayout::default())
    }
}

impl RecordValidator {
    pub fn new(layout: FieldLayout) -> Self {
        Self {
            layout,
            stats: ValidationStats::new(),
        }
    }

    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    pub fn stats(&self) -> &ValidationStats {
        &self.stats
    }

    /// Validate one raw line
    ///
    /// `line_number` is 1-based and only used for diagnostics. Trailing
    /// line terminators are ignored; fields are otherwise taken verbatim.
    pub fn validate_line(&mut self, line_number: usize, raw: &str) -> LineOutcome {
        let outcome = self.classify(line_number, raw);
        self.stats.record(&outcome);
        outcome
    }

    fn classify(&self, line_number: usize, raw: &str) -> LineOutcome {
        let line = raw.trim_end_matches(['\n', '\r']);
        let fields: Vec<&str> = line.split(self.layout.delimiter).collect();

        if fields.len() != self.layout.expected_fields {
            return LineOutcome::Malformed {
                found: fields.len(),
            };
        }

        let recipient_id = fields[self.layout.recipient_id];
        let amount = match check_contribution(
            recipient_id,
            fields[self.layout.transaction_amount],
            fields[self.layout.other_id],
        ) {
            Ok(amount) => amount,
            Err(reason) => {
                trace!("Line {} ineligible: {}", line_number, reason);
                return LineOutcome::Ineligible(reason);
            }
        };

        let zip_prefix = zip_prefix(fields[self.layout.zip_code], self.layout.zip_prefix_len)
            .map(str::to_string);
        let date = parse_transaction_date(fields[self.layout.transaction_date]);

        if zip_prefix.is_none() {
            trace!("Line {} has no usable zip code", line_number);
        }
        if date.is_none() {
            trace!("Line {} has no valid transaction date", line_number);
        }

        LineOutcome::Accepted(Contribution {
            line: line_number,
            recipient_id: recipient_id.to_string(),
            zip_prefix,
            date,
            amount,
        })
    }
}

//! Core data structures shared by the validator, aggregators and writer.

use chrono::NaiveDate;
use std::fmt;

/// A validated contribution ready for aggregation
///
/// `zip_prefix` and `date` are independently optional: a record may feed
/// the zip report, the date report, both, or (when both are `None`) neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    /// 1-based input line number
    pub line: usize,
    pub recipient_id: String,
    pub zip_prefix: Option<String>,
    pub date: Option<NaiveDate>,
    /// Whole currency units
    pub amount: u64,
}

impl Contribution {
    pub fn is_zip_eligible(&self) -> bool {
        self.zip_prefix.is_some()
    }

    pub fn is_date_eligible(&self) -> bool {
        self.date.is_some()
    }
}

/// Why a well-formed line was excluded from all aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IneligibleReason {
    MissingRecipient,
    /// Empty, signed, fractional, non-numeric or out of range
    InvalidAmount,
    /// Contribution came from an entity rather than an individual
    EntityContribution,
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRecipient => write!(f, "missing recipient"),
            Self::InvalidAmount => write!(f, "invalid amount"),
            Self::EntityContribution => write!(f, "entity contribution"),
        }
    }
}

/// Result of validating one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted(Contribution),
    Ineligible(IneligibleReason),
    /// Field count did not match the record layout
    Malformed { found: usize },
}

/// Grouping key of the zip report
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZipKey {
    pub recipient_id: String,
    pub zip_prefix: String,
}

/// Grouping key of the date report
///
/// Field order gives the report order: recipient first, then date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    pub recipient_id: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_orders_by_recipient_then_date() {
        let early = NaiveDate::from_ymd_opt(2017, 1, 5).unwrap();
        let late = NaiveDate::from_ymd_opt(2017, 12, 1).unwrap();

        let a_late = DateKey {
            recipient_id: "C00A".to_string(),
            date: late,
        };
        let b_early = DateKey {
            recipient_id: "C00B".to_string(),
            date: early,
        };
        let a_early = DateKey {
            recipient_id: "C00A".to_string(),
            date: early,
        };

        let mut keys = vec![b_early.clone(), a_late.clone(), a_early.clone()];
        keys.sort();
        assert_eq!(keys, vec![a_early, a_late, b_early]);
    }

    #[test]
    fn test_eligibility_flags() {
        let contribution = Contribution {
            line: 1,
            recipient_id: "C001".to_string(),
            zip_prefix: Some("12345".to_string()),
            date: None,
            amount: 10,
        };
        assert!(contribution.is_zip_eligible());
        assert!(!contribution.is_date_eligible());
    }
}

//! Field-level validation for contribution records
//!
//! Each check works on the raw, untrimmed field text. None of them allocate.

use crate::app::models::IneligibleReason;
use chrono::{Datelike, NaiveDate};

use crate::constants::{DATE_FIELD_LEN, DATE_FORMAT};

/// True when the field is non-empty and made only of ASCII digits
pub fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a transaction amount in whole currency units
///
/// Signs, decimal points and whitespace are rejected, as is any value
/// that does not fit in a `u64`.
pub fn parse_amount(value: &str) -> Option<u64> {
    if !is_all_digits(value) {
        return None;
    }
    value.parse::<u64>().ok()
}

/// First `len` characters of a zip field, if it has at least that many
///
/// Characters are counted, not bytes, and are not otherwise checked.
pub fn zip_prefix(raw: &str, len: usize) -> Option<&str> {
    match raw.char_indices().nth(len) {
        Some((end, _)) => Some(&raw[..end]),
        None if raw.chars().count() == len => Some(raw),
        None => None,
    }
}

/// Parse a strict MMDDYYYY transaction date
///
/// Exactly eight digits are required so that chrono's lenient numeric
/// parsing cannot accept single-digit months or days. The same format is
/// used to render dates in the date report.
pub fn parse_transaction_date(value: &str) -> Option<NaiveDate> {
    if value.len() != DATE_FIELD_LEN || !is_all_digits(value) {
        return None;
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

/// Gate shared by both reports: recipient, amount and other-ID checks
pub fn check_contribution(
    recipient_id: &str,
    amount: &str,
    other_id: &str,
) -> Result<u64, IneligibleReason> {
    if recipient_id.is_empty() {
        return Err(IneligibleReason::MissingRecipient);
    }

    if !other_id.is_empty() {
        return Err(IneligibleReason::EntityContribution);
    }

    parse_amount(amount).ok_or(IneligibleReason::InvalidAmount)
}

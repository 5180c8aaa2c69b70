//! Tests for individual field checks

use super::super::field_validators::{
    check_contribution, is_all_digits, parse_amount, parse_transaction_date, zip_prefix,
};
use crate::app::models::IneligibleReason;
use crate::constants::DATE_FORMAT;
use chrono::NaiveDate;

#[test]
fn test_is_all_digits() {
    assert!(is_all_digits("0"));
    assert!(is_all_digits("00000000100"));
    assert!(!is_all_digits(""));
    assert!(!is_all_digits("-100"));
    assert!(!is_all_digits("+100"));
    assert!(!is_all_digits("100.50"));
    assert!(!is_all_digits(" 100"));
    assert!(!is_all_digits("1e3"));
}

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount("250"), Some(250));
    assert_eq!(parse_amount("007"), Some(7));
    assert_eq!(parse_amount("0"), Some(0));
    assert_eq!(parse_amount("12.5"), None);
    assert_eq!(parse_amount("-5"), None);
    assert_eq!(parse_amount(""), None);

    // Digits only but larger than u64::MAX
    assert_eq!(parse_amount("99999999999999999999999"), None);
}

#[test]
fn test_zip_prefix_boundary() {
    assert_eq!(zip_prefix("1234", 5), None);
    assert_eq!(zip_prefix("12345", 5), Some("12345"));
    assert_eq!(zip_prefix("123455678", 5), Some("12345"));
    assert_eq!(zip_prefix("", 5), None);
}

#[test]
fn test_zip_prefix_accepts_any_characters() {
    assert_eq!(zip_prefix("A1B2C3D", 5), Some("A1B2C"));
    assert_eq!(zip_prefix("  9021", 5), Some("  902"));

    // Counted in characters, never split inside a code point
    assert_eq!(zip_prefix("ÉÉÉÉÉÉ", 5), Some("ÉÉÉÉÉ"));
    assert_eq!(zip_prefix("ÉÉÉÉ", 5), None);
}

#[test]
fn test_parse_transaction_date_valid() {
    assert_eq!(
        parse_transaction_date("01312017"),
        NaiveDate::from_ymd_opt(2017, 1, 31)
    );
    assert_eq!(
        parse_transaction_date("02292016"),
        NaiveDate::from_ymd_opt(2016, 2, 29)
    );
}

#[test]
fn test_parse_transaction_date_invalid() {
    // Not a leap year
    assert_eq!(parse_transaction_date("02292017"), None);
    assert_eq!(parse_transaction_date("13012017"), None);
    assert_eq!(parse_transaction_date("00102017"), None);
    assert_eq!(parse_transaction_date("04312017"), None);
    assert_eq!(parse_transaction_date(""), None);
    // Wrong widths or separators
    assert_eq!(parse_transaction_date("1012017"), None);
    assert_eq!(parse_transaction_date("010120171"), None);
    assert_eq!(parse_transaction_date("01-01-2017"), None);
    assert_eq!(parse_transaction_date("2017-01-01"), None);
    assert_eq!(parse_transaction_date("01012O17"), None);
    assert_eq!(parse_transaction_date("01010000"), None);
}

#[test]
fn test_check_contribution() {
    assert_eq!(check_contribution("C001", "100", ""), Ok(100));
    assert_eq!(
        check_contribution("", "100", ""),
        Err(IneligibleReason::MissingRecipient)
    );
    assert_eq!(
        check_contribution("C001", "100", "C00123456"),
        Err(IneligibleReason::EntityContribution)
    );
    assert_eq!(
        check_contribution("C001", "100.00", ""),
        Err(IneligibleReason::InvalidAmount)
    );
    assert_eq!(
        check_contribution("C001", "", ""),
        Err(IneligibleReason::InvalidAmount)
    );
}

#[test]
fn test_other_id_must_be_exactly_empty() {
    // Whitespace still marks an entity contribution
    assert_eq!(
        check_contribution("C001", "100", " "),
        Err(IneligibleReason::EntityContribution)
    );
}

#[test]
fn test_parsed_date_renders_back_unchanged() {
    for raw in ["01312017", "10012016", "02292016", "12310001"] {
        let date = parse_transaction_date(raw).unwrap();
        assert_eq!(date.format(DATE_FORMAT).to_string(), raw);
    }
}

#[test]
fn test_year_first_dates_rejected() {
    // YYYYMMDD would read as month 20
    assert_eq!(parse_transaction_date("20170131"), None);
}

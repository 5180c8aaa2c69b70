//! Tests for the running statistic and its rounding rule

use super::super::running_stat::{RunningStat, rounded_mean};

#[test]
fn test_new_statistic_starts_at_first_amount() {
    let stat = RunningStat::new(250);

    assert_eq!(stat.median(), 250);
    assert_eq!(stat.count(), 1);
    assert_eq!(stat.total(), 250);
}

#[test]
fn test_count_and_total_track_every_update() {
    let amounts = [40, 10, 333, 0, 17, 1_000];
    let mut stat = RunningStat::new(amounts[0]);

    for (i, amount) in amounts.iter().enumerate().skip(1) {
        stat.add(*amount).unwrap();
        let seen = &amounts[..=i];
        assert_eq!(stat.count(), seen.len() as u64);
        assert_eq!(stat.total(), seen.iter().sum::<u64>());
        assert_eq!(stat.median(), rounded_mean(stat.total(), stat.count()));
    }
}

#[test]
fn test_half_rounds_up() {
    // 1.5 -> 2
    let mut stat = RunningStat::new(1);
    stat.add(2).unwrap();
    assert_eq!(stat.median(), 2);
    assert_eq!(stat.total(), 3);

    assert_eq!(rounded_mean(1, 2), 1);
    assert_eq!(rounded_mean(3, 2), 2);
    assert_eq!(rounded_mean(5, 2), 3);
    assert_eq!(rounded_mean(7, 2), 4);
}

#[test]
fn test_rounds_to_nearest() {
    // 1.75 -> 2, 1.25 -> 1, 2/3 -> 1, 1/3 -> 0
    assert_eq!(rounded_mean(7, 4), 2);
    assert_eq!(rounded_mean(5, 4), 1);
    assert_eq!(rounded_mean(2, 3), 1);
    assert_eq!(rounded_mean(1, 3), 0);
    assert_eq!(rounded_mean(0, 5), 0);
    assert_eq!(rounded_mean(300, 2), 150);
}

#[test]
fn test_rounded_mean_handles_extreme_totals() {
    assert_eq!(rounded_mean(u64::MAX, 1), u64::MAX);
    assert_eq!(rounded_mean(u64::MAX, 2), u64::MAX / 2 + 1);
}

#[test]
fn test_overflow_leaves_statistic_unchanged() {
    let mut stat = RunningStat::new(u64::MAX - 1);

    assert!(stat.add(5).is_none());
    assert_eq!(stat.count(), 1);
    assert_eq!(stat.total(), u64::MAX - 1);
    assert_eq!(stat.median(), u64::MAX - 1);
}

#[test]
fn test_display_renders_report_columns() {
    let mut stat = RunningStat::new(100);
    stat.add(200).unwrap();

    assert_eq!(stat.to_string(), "150|2|300");
}

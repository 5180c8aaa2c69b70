//! Per-key running statistic shared by both aggregators
//!
//! Only `total` and `count` are stored history; `median` is re-derived from
//! them on every update, so each key costs O(1) space. Despite the name the
//! "median" is the running mean rounded to the nearest whole unit, which is
//! what the reports have always carried in that column.

use std::fmt;

/// Running `{median, count, total}` for one grouping key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningStat {
    median: u64,
    count: u64,
    total: u64,
}

impl RunningStat {
    /// Start a statistic from its first contribution
    pub fn new(amount: u64) -> Self {
        Self {
            median: amount,
            count: 1,
            total: amount,
        }
    }

    /// Fold in another contribution
    ///
    /// Returns `None`, leaving the statistic untouched, if the total would
    /// overflow.
    pub fn add(&mut self, amount: u64) -> Option<()> {
        let total = self.total.checked_add(amount)?;
        let count = self.count + 1;

        self.total = total;
        self.count = count;
        self.median = rounded_mean(total, count);
        Some(())
    }

    pub fn median(&self) -> u64 {
        self.median
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Renders the trailing `median|count|total` report columns
impl fmt::Display for RunningStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.median, self.count, self.total)
    }
}

/// `total / count` rounded to the nearest integer, halves rounded up
///
/// All values are non-negative, so half-up is the same as half away from
/// zero. Computed as `floor((2 * total + count) / (2 * count))` in `u128`,
/// which is exact for every `u64` input.
pub fn rounded_mean(total: u64, count: u64) -> u64 {
    debug_assert!(count > 0, "rounded_mean needs at least one contribution");

    let total = u128::from(total);
    let count = u128::from(count);
    // The result never exceeds `total`, so it always fits back in a u64
    ((2 * total + count) / (2 * count)) as u64
}

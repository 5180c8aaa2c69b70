//! Batch aggregation by recipient and transaction date

use chrono::NaiveDate;
use std::collections::HashMap;

use super::running_stat::RunningStat;
use crate::app::models::DateKey;
use crate::constants::DATE_FORMAT;
use crate::{Error, Result};

/// Running statistics per (recipient, date), reported once at end of input
#[derive(Debug, Default)]
pub struct DateAggregator {
    table: HashMap<DateKey, RunningStat>,
}

impl DateAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one contribution in; nothing is emitted until [`finalize`](Self::finalize)
    pub fn update(&mut self, recipient_id: &str, date: NaiveDate, amount: u64) -> Result<()> {
        let key = DateKey {
            recipient_id: recipient_id.to_string(),
            date,
        };

        match self.table.get_mut(&key) {
            Some(stat) => stat.add(amount).ok_or_else(|| {
                Error::amount_overflow(
                    recipient_id,
                    format!("date {}", date.format(DATE_FORMAT)),
                )
            }),
            None => {
                self.table.insert(key, RunningStat::new(amount));
                Ok(())
            }
        }
    }

    /// Current statistic for a key, if it has been seen
    pub fn get(&self, recipient_id: &str, date: NaiveDate) -> Option<&RunningStat> {
        self.table.get(&DateKey {
            recipient_id: recipient_id.to_string(),
            date,
        })
    }

    /// Number of distinct (recipient, date) groups
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Produce the complete date report
    ///
    /// Lines are `recipient|MMDDYYYY|median|count|total\n`, ordered by
    /// recipient and then chronologically. Consumes the aggregator, so the
    /// report can only be produced once.
    pub fn finalize(self) -> Vec<String> {
        let mut entries: Vec<(DateKey, RunningStat)> = self.table.into_iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        entries
            .into_iter()
            .map(|(key, stat)| {
                format!(
                    "{}|{}|{}\n",
                    key.recipient_id,
                    key.date.format(DATE_FORMAT),
                    stat
                )
            })
            .collect()
    }
}

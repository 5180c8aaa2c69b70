//! Streaming aggregation by recipient and zip prefix

use std::collections::HashMap;
use tracing::trace;

use super::running_stat::RunningStat;
use crate::app::models::ZipKey;
use crate::{Error, Result};

/// Running statistics per (recipient, zip prefix)
///
/// Every update yields the report line for the key's new state, so the
/// zip report is a full trace of the input rather than a final snapshot.
#[derive(Debug, Default)]
pub struct ZipAggregator {
    table: HashMap<ZipKey, RunningStat>,
}

impl ZipAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one contribution in and return its report line
    ///
    /// The line has the form `recipient|zip|median|count|total\n`.
    pub fn update(&mut self, recipient_id: &str, zip_prefix: &str, amount: u64) -> Result<String> {
        let key = ZipKey {
            recipient_id: recipient_id.to_string(),
            zip_prefix: zip_prefix.to_string(),
        };

        let stat = match self.table.get_mut(&key) {
            Some(stat) => {
                stat.add(amount).ok_or_else(|| {
                    Error::amount_overflow(recipient_id, format!("zip {}", zip_prefix))
                })?;
                *stat
            }
            None => {
                let stat = RunningStat::new(amount);
                self.table.insert(key, stat);
                stat
            }
        };

        trace!(
            "Zip group {}|{} now at count {}",
            recipient_id,
            zip_prefix,
            stat.count()
        );

        Ok(format!("{}|{}|{}\n", recipient_id, zip_prefix, stat))
    }

    /// Current statistic for a key, if it has been seen
    pub fn get(&self, recipient_id: &str, zip_prefix: &str) -> Option<&RunningStat> {
        self.table.get(&ZipKey {
            recipient_id: recipient_id.to_string(),
            zip_prefix: zip_prefix.to_string(),
        })
    }

    /// Number of distinct (recipient, zip) groups
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

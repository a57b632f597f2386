use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::matcher::PartialResult;

/// Running totals per target index, shared by all workers of a run.
///
/// Workers only ever call [`GlobalTotals::accumulate`]; the totals are read
/// once, after the pool has joined, through [`GlobalTotals::into_counts`].
#[derive(Debug)]
pub struct GlobalTotals {
    counts: Mutex<Vec<u64>>,
}

impl GlobalTotals {
    /// Zeroed totals for `targets` target indices.
    pub fn new(targets: usize) -> GlobalTotals {
        GlobalTotals {
            counts: Mutex::new(vec![0; targets]),
        }
    }

    /// Add one word's contribution. The whole update happens under a single
    /// lock acquisition. Indices in `partial` beyond the known targets are
    /// ignored.
    pub fn accumulate(&self, partial: &PartialResult) -> Result<()> {
        let mut counts = self.counts.lock().map_err(|_| Error::TotalsPoisoned)?;
        for (i, total) in counts.iter_mut().enumerate() {
            *total += partial.get(i);
        }
        Ok(())
    }

    pub fn into_counts(self) -> Result<Vec<u64>> {
        self.counts.into_inner().map_err(|_| Error::TotalsPoisoned)
    }
}

/// Render totals as `Case #n: total` lines, 1-based and in index order.
pub fn case_lines(totals: &[u64]) -> Vec<String> {
    totals
        .iter()
        .enumerate()
        .map(|(i, total)| format!("Case #{}: {}", i + 1, total))
        .collect()
}

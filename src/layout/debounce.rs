//! Per-row cancellable measurement scheduling.
//!
//! Each row has at most one pending measurement. Scheduling a row again
//! replaces its deadline, so layout churn during fast scrolling collapses
//! into a single measurement once the row has been quiet for `delay`.

use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct MeasureScheduler {
    delay: Duration,
    pending: HashMap<usize, Instant>,
}

impl MeasureScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: HashMap::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending measurement for `index` and schedule a new one.
    pub fn schedule(&mut self, index: usize, now: Instant) {
        self.pending.insert(index, now + self.delay);
    }

    /// Returns true if a measurement was pending.
    pub fn cancel(&mut self, index: usize) -> bool {
        self.pending.remove(&index).is_some()
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains_key(&index)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return every row whose deadline has passed, in index order.
    pub fn take_due(&mut self, now: Instant) -> Vec<usize> {
        let mut due: Vec<usize> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(index, _)| *index)
            .collect();
        due.sort_unstable();

        for index in &due {
            self.pending.remove(index);
        }
        due
    }
}

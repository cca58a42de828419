//! Layout cache - last known measurements of mounted rows and the separator.
//!
//! Entries are created lazily as rows mount and are never evicted: a row that
//! scrolls out of view keeps its last measurement until it is overwritten.

use super::debounce::MeasureScheduler;
use crate::types::{LayoutMeasurement, Orientation};
use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, Instant};
use tracing::trace;

/// Outcome of a measurement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureRequest {
    /// Measurement scheduled after the debounce delay
    Scheduled,
    /// Row is currently being dragged; its rendered slot is not its logical one
    Suppressed,
    /// Row has no live reference
    Dropped,
}

#[derive(Debug, Clone)]
pub struct LayoutCache {
    measurements: HashMap<usize, LayoutMeasurement>,
    /// Lengths reported by the per-row layout callback
    row_lengths: HashMap<usize, f32>,
    /// Defined by the first rendered separator, immutable afterwards
    separator_length: Option<f32>,
    mounted: BTreeSet<usize>,
    scheduler: MeasureScheduler,
}

impl LayoutCache {
    pub fn new(debounce: Duration) -> Self {
        Self {
            measurements: HashMap::new(),
            row_lengths: HashMap::new(),
            separator_length: None,
            mounted: BTreeSet::new(),
            scheduler: MeasureScheduler::new(debounce),
        }
    }

    // ------------------------------------------------------------------------
    // Measurements
    // ------------------------------------------------------------------------

    /// Store or overwrite the measurement of `index`.
    pub fn record_measurement(&mut self, index: usize, measurement: LayoutMeasurement) {
        self.measurements.insert(index, measurement);
    }

    pub fn get(&self, index: usize) -> Option<&LayoutMeasurement> {
        self.measurements.get(&index)
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    // ------------------------------------------------------------------------
    // Row lengths and separator
    // ------------------------------------------------------------------------

    pub fn record_row_length(&mut self, index: usize, length: f32) {
        self.row_lengths.insert(index, length);
    }

    /// Layout length of `index`, falling back to its measured length.
    pub fn row_length(&self, index: usize, orientation: Orientation) -> Option<f32> {
        self.row_lengths
            .get(&index)
            .copied()
            .or_else(|| self.get(index).map(|m| m.length(orientation)))
    }

    /// Record the separator length. Only the first report is kept.
    /// Returns true if this call defined it.
    pub fn record_separator(&mut self, length: f32) -> bool {
        if self.separator_length.is_some() {
            return false;
        }
        self.separator_length = Some(length);
        true
    }

    /// Separator length, zero until a separator has rendered.
    pub fn separator_length(&self) -> f32 {
        self.separator_length.unwrap_or(0.0)
    }

    // ------------------------------------------------------------------------
    // Row references and debounced measurement
    // ------------------------------------------------------------------------

    pub fn mount(&mut self, index: usize) {
        self.mounted.insert(index);
    }

    /// Forget the row reference. The cached measurement is kept.
    pub fn unmount(&mut self, index: usize) {
        self.mounted.remove(&index);
        self.scheduler.cancel(index);
    }

    pub fn is_mounted(&self, index: usize) -> bool {
        self.mounted.contains(&index)
    }

    pub fn mounted_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.mounted.iter().copied()
    }

    /// Debounced (re-)measurement of `index`.
    pub fn request_measurement(
        &mut self,
        index: usize,
        now: Instant,
        drag_index: Option<usize>,
    ) -> MeasureRequest {
        if !self.is_mounted(index) {
            trace!(index, "Measurement dropped: row not mounted");
            return MeasureRequest::Dropped;
        }
        if drag_index == Some(index) {
            self.scheduler.cancel(index);
            trace!(index, "Measurement suppressed: row is being dragged");
            return MeasureRequest::Suppressed;
        }

        self.scheduler.schedule(index, now);
        MeasureRequest::Scheduled
    }

    /// Discard a queued measurement, e.g. for the row that was just dragged.
    pub fn cancel_measurement(&mut self, index: usize) -> bool {
        self.scheduler.cancel(index)
    }

    pub fn is_measurement_pending(&self, index: usize) -> bool {
        self.scheduler.is_pending(index)
    }

    /// Rows whose debounce elapsed and that are still mounted.
    pub fn take_due(&mut self, now: Instant) -> Vec<usize> {
        let due = self.scheduler.take_due(now);
        due.into_iter().filter(|index| self.mounted.contains(index)).collect()
    }
}

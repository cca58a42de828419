//! Callbacks from the rendering collaborator: row mounts, layout passes,
//! scroll frames, and the measurement pump.

use super::{ListEngine, ListHost};
use crate::layout::MeasureRequest;
use crate::profile_scope;
use crate::types::LayoutMeasurement;
use std::time::Instant;
use tracing::{debug, trace};

impl<T> ListEngine<T> {
    /// A row mounted (or its reference changed): schedule a measurement.
    pub fn on_row_mounted(&mut self, index: usize, now: Instant) -> MeasureRequest {
        self.layout.mount(index);
        self.request_measurement(index, now)
    }

    /// A row left the rendered window. Its last measurement stays cached.
    pub fn on_row_unmounted(&mut self, index: usize) {
        self.layout.unmount(index);
    }

    /// Debounced re-measurement of one row.
    pub fn request_measurement(&mut self, index: usize, now: Instant) -> MeasureRequest {
        self.layout.request_measurement(index, now, self.drag.drag_index())
    }

    /// The host reported a row's rectangle directly. Ignored for the dragged
    /// row; returns whether the measurement was recorded.
    pub fn on_row_measured(&mut self, index: usize, measurement: LayoutMeasurement) -> bool {
        if self.drag.drag_index() == Some(index) {
            trace!(index, "Measurement of dragged row ignored");
            return false;
        }
        self.layout.record_measurement(index, measurement);
        true
    }

    /// Layout pass reported the along-axis length of a row.
    pub fn on_row_layout(&mut self, index: usize, length: f32) {
        if self.drag.drag_index() == Some(index) {
            return;
        }
        self.layout.record_row_length(index, length);
    }

    /// Layout pass of a separator. The first one defines spacing for the session.
    pub fn on_separator_layout(&mut self, length: f32) {
        if self.layout.record_separator(length) {
            debug!(length, "Separator length discovered");
        }
    }

    /// Layout pass of the list viewport.
    pub fn on_list_layout(&mut self, width: f32, height: f32) {
        let length = if self.config.orientation.is_horizontal() { width } else { height };
        self.scroll.set_viewport_length(length);
    }

    /// Window offset of the list's container along the list axis.
    pub fn on_container_layout(&mut self, leading_offset: f32) {
        self.leading_offset = leading_offset;
    }

    /// Scroll frame.
    pub fn on_scroll(&mut self, offset: f32) {
        self.scroll.set_offset(offset);
    }

    /// Momentum scrolling settled: re-measure every mounted row.
    pub fn on_momentum_scroll_end(&mut self, now: Instant) -> usize {
        let rows: Vec<usize> = self.layout.mounted_rows().collect();
        let scheduled = rows
            .into_iter()
            .filter(|index| self.request_measurement(*index, now) == MeasureRequest::Scheduled)
            .count();
        trace!(scheduled, "Re-measure after momentum scroll");
        scheduled
    }

    /// Fire every measurement whose debounce elapsed. Returns how many were recorded.
    pub fn poll_measurements(&mut self, now: Instant, host: &mut impl ListHost) -> usize {
        profile_scope!("poll_measurements");

        let mut recorded = 0;
        for index in self.layout.take_due(now) {
            if self.drag.drag_index() == Some(index) {
                trace!(index, "Measurement skipped: row is being dragged");
                continue;
            }
            match host.measure_row(index) {
                Some(measurement) => {
                    self.layout.record_measurement(index, measurement);
                    recorded += 1;
                }
                None => trace!(index, "Measurement dropped: row reference gone"),
            }
        }
        recorded
    }
}

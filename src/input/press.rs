//! Drag start - long press qualification and resolving the pressed row.

use crate::engine::ListEngine;
use crate::input::coords::{GeometryContext, is_within_reorderable_bounds};
use crate::types::DragStartEvent;
use tracing::{debug, trace};

/// Result of a drag-start event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Session started and waits for the first move
    Armed(usize),
    /// Session started and the item follows the pointer
    Dragging(usize),
    /// Another session is already running
    AlreadyActive,
    /// Press was released before the long-press delay
    TooShort,
    /// Rows or viewport not laid out yet
    NotMeasured,
    /// Press lies outside the reorderable bounds
    OutOfBounds,
}

impl StartOutcome {
    pub fn is_started(self) -> bool {
        matches!(self, Self::Armed(_) | Self::Dragging(_))
    }
}

impl<T> ListEngine<T> {
    pub fn handle_drag_start(&mut self, event: &DragStartEvent) -> StartOutcome {
        if self.drag.is_active() {
            trace!("Drag start ignored: session already active");
            return StartOutcome::AlreadyActive;
        }
        if event.held_for < self.config.long_press_delay() {
            trace!(held_for = ?event.held_for, "Drag start ignored: press too short");
            return StartOutcome::TooShort;
        }

        let orientation = self.config.orientation;
        let coordinate = event.position.along(orientation);

        let Some(measurement) = self.layout.get(self.reference_row()).copied() else {
            trace!("Drag start ignored: reference row not measured");
            return StartOutcome::NotMeasured;
        };
        if !is_within_reorderable_bounds(
            coordinate,
            &measurement,
            orientation,
            self.scroll.viewport_length,
            self.config.edge_margin,
        ) {
            debug!(coordinate, "Drag start outside reorderable bounds");
            return StartOutcome::OutOfBounds;
        }

        let Some(index) = self
            .geometry(measurement.length(orientation))
            .index_at(coordinate)
        else {
            return StartOutcome::NotMeasured;
        };

        self.layout.cancel_measurement(index);
        let outcome = if self.config.platform.reports_active_phase() {
            self.drag.start_dragging(index);
            StartOutcome::Dragging(index)
        } else {
            self.drag.arm(index);
            StartOutcome::Armed(index)
        };
        debug!(index, ?outcome, "Drag started");
        outcome
    }

    /// Row whose measured length stands in for every row: the dragged row,
    /// or the first row while idle.
    pub(crate) fn reference_row(&self) -> usize {
        self.drag.drag_index().unwrap_or(0)
    }

    pub(crate) fn geometry(&self, row_length: f32) -> GeometryContext {
        GeometryContext::new(
            self.items.len(),
            self.scroll.offset,
            row_length,
            self.layout.separator_length(),
        )
    }
}

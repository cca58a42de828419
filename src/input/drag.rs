//! Drag move - floating indicator, edge auto-scroll and live reordering.
//!
//! ## Performance Notes
//!
//! Moves arrive at pointer rate. Each one does at most one cache lookup, one
//! index computation and one single-element relocation; nothing allocates
//! unless a reorder happens (and then only for the trace log).
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::coords::is_within_reorderable_bounds;
use crate::constants::DRAG_MOVE_BUDGET_MS;
use crate::engine::{ListEngine, ListHost};
use crate::order::relocate;
use crate::profile_scope;
use crate::types::{DragMoveEvent, LayoutMeasurement, Orientation, Point};
use tracing::{debug, trace};

/// Result of a drag-move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No session active
    Ignored,
    /// Dragged row has no cached measurement yet
    NotMeasured,
    /// Pointer outside the reorderable bounds; index mapping not attempted
    OutOfBounds,
    /// Move processed
    Tracked {
        /// `(from, to)` when the dragged item changed rows
        reorder: Option<(usize, usize)>,
        /// Whether a scroll request went to the host
        scrolled: bool,
    },
}

impl MoveOutcome {
    pub fn reorder(self) -> Option<(usize, usize)> {
        match self {
            Self::Tracked { reorder, .. } => reorder,
            _ => None,
        }
    }

    pub fn scrolled(self) -> bool {
        matches!(self, Self::Tracked { scrolled: true, .. })
    }
}

impl<T> ListEngine<T> {
    pub fn handle_drag_move(&mut self, event: &DragMoveEvent, host: &mut impl ListHost) -> MoveOutcome {
        profile_scope!("handle_drag_move", DRAG_MOVE_BUDGET_MS);

        let Some(index) = self.drag.drag_index() else {
            return MoveOutcome::Ignored;
        };

        let orientation = self.config.orientation;
        let coordinate = event.position.along(orientation);

        let Some(measurement) = self.layout.get(index).copied() else {
            trace!(index, "Drag move ignored: dragged row not measured");
            return MoveOutcome::NotMeasured;
        };
        if !is_within_reorderable_bounds(
            coordinate,
            &measurement,
            orientation,
            self.scroll.viewport_length,
            self.config.edge_margin,
        ) {
            return MoveOutcome::OutOfBounds;
        }

        if self.drag.confirm() {
            debug!(index, "Drag confirmed by first move");
        }

        self.update_indicator(event.position, index, &measurement);

        let row_length = measurement.length(orientation);
        let scrolled = match self.auto_scroll.on_drag_move(&mut self.scroll, coordinate, row_length) {
            Some(request) => {
                host.scroll_to_offset(request);
                true
            }
            None => false,
        };

        let reorder = self.update_sequence(coordinate, index, row_length);
        MoveOutcome::Tracked { reorder, scrolled }
    }

    /// Relocate the dragged item if the pointer now resolves to another row.
    fn update_sequence(&mut self, coordinate: f32, index: usize, row_length: f32) -> Option<(usize, usize)> {
        let target = self.geometry(row_length).index_at(coordinate)?;
        if target == index || !relocate(&mut self.items, index, target) {
            return None;
        }
        self.drag.set_index(target);

        if tracing::enabled!(tracing::Level::TRACE) {
            trace!(from = index, to = target, order = ?self.keys(), "Reordered");
        }
        Some((index, target))
    }

    /// Center the floating duplicate on the pointer along the list axis.
    fn update_indicator(&mut self, position: Point, index: usize, measurement: &LayoutMeasurement) {
        let orientation = self.config.orientation;
        let half = self
            .layout
            .row_length(index, orientation)
            .unwrap_or_else(|| measurement.length(orientation))
            / 2.0;

        self.indicator = match orientation {
            Orientation::Vertical => Point::from_axes(
                orientation,
                position.y + self.leading_offset - half + self.config.edge_margin,
                0.0,
            ),
            Orientation::Horizontal => {
                let cross = if self.config.platform.reports_active_phase() {
                    measurement.cross_offset(orientation)
                } else {
                    0.0
                };
                Point::from_axes(orientation, position.x - half, cross)
            }
        };
    }
}

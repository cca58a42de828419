//! Drag end - return to Idle on end, cancel or failure.

use crate::engine::ListEngine;
use crate::types::{DragEndEvent, Point};
use tracing::debug;

impl<T> ListEngine<T> {
    /// Reset the session. Idempotent: safe to call while already idle.
    pub fn handle_drag_end(&mut self, event: &DragEndEvent) {
        let previous = self.drag;

        if let Some(index) = previous.drag_index() {
            self.layout.cancel_measurement(index);
        }
        self.drag.reset();
        self.scroll.disarm();
        self.indicator = Point::ORIGIN;

        if previous.is_active() {
            debug!(
                reason = ?event.reason,
                source = ?previous.source_index(),
                index = ?previous.drag_index(),
                "Drag finished"
            );
        }
    }

    pub fn end_drag(&mut self) {
        self.handle_drag_end(&DragEndEvent::ended());
    }

    pub fn cancel_drag(&mut self) {
        self.handle_drag_end(&DragEndEvent::cancelled());
    }

    pub fn fail_drag(&mut self) {
        self.handle_drag_end(&DragEndEvent::failed());
    }
}

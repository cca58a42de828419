//! Engine state - the `ListEngine` struct and the host seam.

use crate::input::DragState;
use crate::layout::LayoutCache;
use crate::scroll::{AutoScrollController, ScrollRequest, ScrollState};
use crate::settings::ListConfig;
use crate::types::{LayoutMeasurement, Point};

/// The rendering/virtualization collaborator.
///
/// Handlers that need to reach the host take it as an argument, the same way
/// every event is delivered: one at a time, on the thread that owns the engine.
pub trait ListHost {
    /// Measure a row in window coordinates. `None` when the row is no longer mounted.
    fn measure_row(&mut self, index: usize) -> Option<LayoutMeasurement>;

    /// Scroll the list to an absolute offset. Fire-and-forget.
    fn scroll_to_offset(&mut self, request: ScrollRequest);
}

pub(crate) type KeyFn<T> = Box<dyn Fn(&T, usize) -> String>;
pub(crate) type TapFn<T> = Box<dyn FnMut(&T, usize)>;

/// Drag-to-reorder engine for one list.
///
/// Owns the order, the drag session, the scroll state and the layout cache;
/// several engines can coexist without sharing anything.
pub struct ListEngine<T> {
    pub(crate) config: ListConfig,
    /// Rendered order
    pub(crate) items: Vec<T>,
    pub(crate) key_fn: KeyFn<T>,
    pub(crate) on_item_tap: Option<TapFn<T>>,
    /// Drag state machine
    pub(crate) drag: DragState,
    pub(crate) scroll: ScrollState,
    pub(crate) auto_scroll: AutoScrollController,
    pub(crate) layout: LayoutCache,
    /// Translation of the floating duplicate, origin when not dragging
    pub(crate) indicator: Point,
    /// Window offset of the list container along the list axis
    pub(crate) leading_offset: f32,
}

impl<T> std::fmt::Debug for ListEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListEngine")
            .field("config", &self.config)
            .field("len", &self.items.len())
            .field("drag", &self.drag)
            .field("scroll", &self.scroll)
            .field("indicator", &self.indicator)
            .finish_non_exhaustive()
    }
}

//! Engine lifecycle - construction, re-initialization and what the visual layer reads.

use super::ListEngine;
use crate::input::DragState;
use crate::layout::LayoutCache;
use crate::scroll::{AutoScrollController, ScrollState};
use crate::settings::ListConfig;
use crate::types::{DragSession, Point};
use tracing::debug;

impl<T> ListEngine<T> {
    /// Seed the engine with the initial data set.
    ///
    /// `key_fn` extracts the stable key of an item; it is the only thing the
    /// engine ever reads from an item.
    pub fn new(config: ListConfig, items: Vec<T>, key_fn: impl Fn(&T, usize) -> String + 'static) -> Self {
        debug!(len = items.len(), orientation = ?config.orientation, "List engine initialized");
        Self {
            auto_scroll: AutoScrollController::new(config.animated_scroll),
            layout: LayoutCache::new(config.measure_debounce()),
            config,
            items,
            key_fn: Box::new(key_fn),
            on_item_tap: None,
            drag: DragState::default(),
            scroll: ScrollState::default(),
            indicator: Point::ORIGIN,
            leading_offset: 0.0,
        }
    }

    /// Register a callback for taps on a row outside of a drag.
    pub fn with_item_tap(mut self, on_tap: impl FnMut(&T, usize) + 'static) -> Self {
        self.on_item_tap = Some(Box::new(on_tap));
        self
    }

    /// Replace the order wholesale. Any drag in progress is abandoned.
    ///
    /// Cached row measurements are kept; they are indexed by row slot and
    /// get refreshed by the next layout pass.
    pub fn reset_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.drag.reset();
        self.scroll.disarm();
        self.indicator = Point::ORIGIN;
        debug!(len = self.items.len(), "List engine re-initialized");
    }

    /// Tap on a row. Ignored while a drag is active or when out of range.
    pub fn tap(&mut self, index: usize) -> bool {
        if self.drag.is_active() {
            return false;
        }
        let (Some(item), Some(on_tap)) = (self.items.get(index), self.on_item_tap.as_mut()) else {
            return false;
        };
        on_tap(item, index);
        true
    }

    // ------------------------------------------------------------------------
    // Read access for the visual layer
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Current order, for rendering
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Hand the order back, e.g. to persist it after the list is torn down
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key_of(&self, index: usize) -> Option<String> {
        self.items.get(index).map(|item| (self.key_fn)(item, index))
    }

    pub fn keys(&self) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (self.key_fn)(item, index))
            .collect()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn session(&self) -> DragSession {
        self.drag.session()
    }

    pub fn drag_index(&self) -> Option<usize> {
        self.drag.drag_index()
    }

    /// True once the floating duplicate should be rendered
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// True for the row that should render a placeholder instead of its item
    pub fn is_drag_source(&self, index: usize) -> bool {
        self.drag.is_dragging() && self.drag.drag_index() == Some(index)
    }

    /// Translation of the floating duplicate
    pub fn indicator(&self) -> Point {
        self.indicator
    }

    /// Along-axis length of the placeholder left in the dragged row's slot
    pub fn placeholder_length(&self) -> Option<f32> {
        let index = self.drag.drag_index()?;
        self.layout.row_length(index, self.config.orientation)
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn layout(&self) -> &LayoutCache {
        &self.layout
    }
}

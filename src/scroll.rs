//! Scroll state and edge auto-scroll.
//!
//! The controller is a single-shot throttle, not a speed model: crossing a
//! viewport edge issues one absolute scroll request, then stays quiet until a
//! move reports the dragged item back inside the viewport.

use tracing::debug;

/// Scroll position of the list as last reported by the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Current scroll offset along the list axis
    pub offset: f32,
    /// Visible length of the list along its axis
    pub viewport_length: f32,
    /// Set once a request was issued for the current edge crossing
    pub is_auto_scrolling: bool,
}

impl ScrollState {
    pub fn new(viewport_length: f32) -> Self {
        Self {
            viewport_length,
            ..Self::default()
        }
    }

    /// Host reported a new scroll offset
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    pub fn set_viewport_length(&mut self, length: f32) {
        self.viewport_length = length;
    }

    pub fn is_at_start(&self) -> bool {
        self.offset == 0.0
    }

    /// Stop auto-scrolling, e.g. when the drag ends
    pub fn disarm(&mut self) {
        self.is_auto_scrolling = false;
    }
}

/// Imperative "scroll to absolute offset" command for the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub offset: f32,
    pub animated: bool,
}

/// Which viewport edge the dragged item crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeCrossing {
    Leading,
    Trailing,
}

/// Decides when dragging near an edge should scroll the list.
#[derive(Clone, Copy, Debug)]
pub struct AutoScrollController {
    animated: bool,
}

impl AutoScrollController {
    pub fn new(animated: bool) -> Self {
        Self { animated }
    }

    /// Edge the item at `position` with `item_length` is crossing, if any.
    ///
    /// The leading edge only counts while the list is scrolled away from its start.
    pub fn crossing(&self, scroll: &ScrollState, position: f32, item_length: f32) -> Option<EdgeCrossing> {
        if position + item_length > scroll.viewport_length {
            Some(EdgeCrossing::Trailing)
        } else if position < item_length && !scroll.is_at_start() {
            Some(EdgeCrossing::Leading)
        } else {
            None
        }
    }

    /// Evaluate one drag move. Returns a request at most once per edge crossing.
    pub fn on_drag_move(
        &self,
        scroll: &mut ScrollState,
        position: f32,
        item_length: f32,
    ) -> Option<ScrollRequest> {
        match self.crossing(scroll, position, item_length) {
            Some(edge) if !scroll.is_auto_scrolling => {
                scroll.is_auto_scrolling = true;
                debug!(?edge, offset = position, "Auto-scroll armed");
                Some(ScrollRequest {
                    offset: position,
                    animated: self.animated,
                })
            }
            Some(_) => None,
            None => {
                scroll.disarm();
                None
            }
        }
    }
}

//! Drag state machine - the single source of truth for the drag session.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Armed        (qualifying long press, platform without an active phase)
//! Idle     -> Dragging     (qualifying long press, platform with an active phase)
//! Armed    -> Dragging     (first move event)
//! Dragging -> Dragging     (move crosses into another row: index updated)
//!
//! Any      -> Idle         (end / cancel / fail)
//! ```

use crate::types::DragSession;

/// Drag session state.
///
/// Replaces the `dragging: bool` + `drag_index: -1` pair; an index only
/// exists while a session does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,

    /// Long press accepted, waiting for the first move to confirm
    Armed {
        /// Row resolved from the press position
        index: usize,
    },

    /// Item follows the pointer
    Dragging {
        /// Row the drag started from
        source_index: usize,
        /// Row the dragged item currently occupies
        index: usize,
    },
}

impl DragState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while armed or dragging
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    /// Returns true once the drag has been confirmed
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Current index of the dragged row, if any
    pub fn drag_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Armed { index } | Self::Dragging { index, .. } => Some(*index),
        }
    }

    /// Row the session started from
    pub fn source_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Armed { index } => Some(*index),
            Self::Dragging { source_index, .. } => Some(*source_index),
        }
    }

    pub fn arm(&mut self, index: usize) {
        *self = Self::Armed { index };
    }

    pub fn start_dragging(&mut self, index: usize) {
        *self = Self::Dragging {
            source_index: index,
            index,
        };
    }

    /// Promote Armed to Dragging. Returns true if a promotion happened.
    pub fn confirm(&mut self) -> bool {
        if let Self::Armed { index } = *self {
            self.start_dragging(index);
            true
        } else {
            false
        }
    }

    /// Update the dragged row after a reorder
    pub fn set_index(&mut self, new_index: usize) {
        match self {
            Self::Armed { index } | Self::Dragging { index, .. } => *index = new_index,
            Self::Idle => {}
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Snapshot for the visual layer
    pub fn session(&self) -> DragSession {
        DragSession {
            active: self.is_active(),
            dragging: self.is_dragging(),
            source_index: self.source_index(),
            current_index: self.drag_index(),
        }
    }
}

//! Core types shared by the drag engine.
//!
//! Geometry primitives, layout measurements, the drag session snapshot the
//! visual layer reads, and the gesture lifecycle events the input collaborator
//! delivers.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Geometry
// ============================================================================

/// A position in list-viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component along the list's scroll axis.
    #[inline]
    pub fn along(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.y,
            Orientation::Horizontal => self.x,
        }
    }

    /// Build a point from along-axis and cross-axis components.
    #[inline]
    pub fn from_axes(orientation: Orientation, along: f32, cross: f32) -> Self {
        match orientation {
            Orientation::Vertical => Self::new(cross, along),
            Orientation::Horizontal => Self::new(along, cross),
        }
    }
}

/// Scroll axis of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Measured rectangle of one row, in window coordinates.
///
/// Only valid until the next layout pass; a row that is mid-animation may
/// report a position that does not match its logical slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutMeasurement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutMeasurement {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Offset along the scroll axis.
    pub fn offset(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.y,
            Orientation::Horizontal => self.x,
        }
    }

    /// Offset across the scroll axis.
    pub fn cross_offset(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.x,
            Orientation::Horizontal => self.y,
        }
    }

    /// Length along the scroll axis.
    pub fn length(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.height,
            Orientation::Horizontal => self.width,
        }
    }

    /// Length across the scroll axis.
    pub fn cross_length(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }
}

// ============================================================================
// Platform
// ============================================================================

/// How the host's long-press recognizer reports its phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePlatform {
    /// Reports a distinct "active" phase: a qualifying press starts dragging immediately.
    Ios,
    /// No distinct active phase: the press arms, the first move confirms.
    #[default]
    Android,
}

impl GesturePlatform {
    pub fn reports_active_phase(self) -> bool {
        matches!(self, Self::Ios)
    }
}

// ============================================================================
// Drag Session
// ============================================================================

/// Read-only snapshot of the drag session for the visual layer.
///
/// `active` covers both the armed and the dragging phase; `dragging` is only
/// set once the floating duplicate should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragSession {
    pub active: bool,
    pub dragging: bool,
    pub source_index: Option<usize>,
    pub current_index: Option<usize>,
}

// ============================================================================
// Gesture Lifecycle Events
// ============================================================================

/// Long-press recognized at `position` after the pointer was held for `held_for`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStartEvent {
    pub position: Point,
    pub held_for: Duration,
}

/// Pointer moved while the long-press recognizer is tracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMoveEvent {
    pub position: Point,
}

/// Why the gesture finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEndReason {
    Ended,
    Cancelled,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEndEvent {
    pub reason: DragEndReason,
}

impl DragEndEvent {
    pub fn ended() -> Self {
        Self { reason: DragEndReason::Ended }
    }

    pub fn cancelled() -> Self {
        Self { reason: DragEndReason::Cancelled }
    }

    pub fn failed() -> Self {
        Self { reason: DragEndReason::Failed }
    }
}

//! Engine-wide constants.
//!
//! Centralizes the tuning values used by the geometry engine, the layout
//! cache scheduler and the default configuration.

// ============================================================================
// Geometry
// ============================================================================

/// Fixed margin (px) added to the leading/trailing reorderable bounds.
/// Matches the default spacing the list widget puts around its content.
pub const LIST_EDGE_MARGIN: f32 = 4.0;

// ============================================================================
// Gestures
// ============================================================================

/// Default long-press activation delay in milliseconds
pub const DEFAULT_LONG_PRESS_MS: u64 = 700;

// ============================================================================
// Measurement Debounce
// ============================================================================

/// Measurement debounce on platforms that report a distinct active gesture phase
pub const MEASURE_DEBOUNCE_IOS_MS: u64 = 100;

/// Measurement debounce everywhere else
pub const MEASURE_DEBOUNCE_ANDROID_MS: u64 = 300;

/// Hot-path budget for a single drag-move event before `ScopedTimer` warns.
pub const DRAG_MOVE_BUDGET_MS: f64 = 4.0;

// ============================================================================
// Demo
// ============================================================================

/// Number of items seeded by the demo binary
pub const DEMO_ITEM_COUNT: usize = 20;

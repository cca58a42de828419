//! Gesture handling for drag-to-reorder.
//!
//! The input collaborator delivers a long-press lifecycle: start, a stream of
//! moves, then end, cancel or failure. Each is handled on the engine, one
//! event at a time.
//!
//! ## Architecture
//!
//! The drag session is an explicit state machine (`DragState`) instead of a
//! `dragging` flag plus a `-1` sentinel index.
//!
//! ## Modules
//!
//! - `state` - Drag state machine enum and helper methods
//! - `coords` - Coordinate to row index mapping and reorderable bounds
//! - `press` - Drag start (long press qualification, index resolution)
//! - `drag` - Drag move (auto-scroll, reorder)
//! - `release` - Drag end / cancel / fail

pub mod coords;
mod drag;
mod press;
mod release;
mod state;

pub use coords::{GeometryContext, coordinate_to_index, is_within_reorderable_bounds};
pub use drag::MoveOutcome;
pub use press::StartOutcome;
pub use state::DragState;

//! Headless drag-to-reorder engine for scrollable lists.
//!
//! A user long-presses a row, drags it across the list, and the engine
//! reorders items live while asking the host to auto-scroll near the
//! viewport edges. Rendering, virtualization and gesture capture stay with
//! the host; the engine owns the drag state machine, the geometry that maps a
//! pointer coordinate to a row, and the cache of row measurements.
//!
//! ## Modules
//!
//! - `engine` - `ListEngine` (one per list) and the `ListHost` seam
//! - `input` - Drag state machine, geometry, start/move/end handlers
//! - `layout` - Row measurement cache with debounced re-measurement
//! - `scroll` - Scroll state and edge auto-scroll
//! - `order` - Single-element relocation
//! - `settings` - Initialization-time configuration
//! - `error` - Configuration errors
//! - `perf` - Hot-path timing (`profiling` feature)
//! - `logging` - tracing-subscriber setup for binaries

pub mod constants;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod order;
pub mod perf;
pub mod scroll;
pub mod settings;
pub mod types;

pub use engine::{ListEngine, ListHost};
pub use error::{ConfigError, ConfigResult};
pub use input::{DragState, MoveOutcome, StartOutcome};
pub use scroll::ScrollRequest;
pub use settings::ListConfig;
pub use types::{
    DragEndEvent, DragEndReason, DragMoveEvent, DragSession, DragStartEvent, GesturePlatform,
    LayoutMeasurement, Orientation, Point,
};

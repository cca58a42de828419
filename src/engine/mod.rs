//! List engine - per-list drag state and the seams to the host.
//!
//! This module is organized into several submodules:
//! - `state` - The `ListEngine` struct and the `ListHost` trait
//! - `lifecycle` - Construction, re-initialization and read accessors
//! - `layout_events` - Callbacks from the rendering collaborator
//!
//! Gesture handling lives in `crate::input` as further `impl ListEngine` blocks.

mod layout_events;
mod lifecycle;
mod state;

pub use state::{ListEngine, ListHost};

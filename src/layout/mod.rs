//! Row layout bookkeeping.
//!
//! - `cache` - Measurements, row lengths, separator length, mounted rows
//! - `debounce` - Per-row cancellable measurement scheduler owned by the cache

mod cache;
mod debounce;

pub use cache::{LayoutCache, MeasureRequest};
pub use debounce::MeasureScheduler;

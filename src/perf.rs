//! Hot-path timing instrumentation.
//!
//! Drag-move events arrive at pointer rate (60+ per second) and must never
//! stall the event loop. Enable the `profiling` feature to time the handlers:
//! ```toml
//! [dependencies]
//! draglist = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn handle_drag_move() {
//!     profile_scope!("handle_drag_move", DRAG_MOVE_BUDGET_MS);
//!     // ...
//! }
//! ```

use std::time::Instant;
use tracing::{trace, warn};

/// Default threshold for `profile_scope!` without an explicit budget.
pub const DEFAULT_THRESHOLD_MS: f64 = 16.67;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DEFAULT_THRESHOLD_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// RAII timer: logs on drop, warns when the scope exceeded its threshold.
#[derive(Debug)]
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        if ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        } else {
            trace!(operation = self.name, elapsed_ms = ms, "Timed");
        }
    }
}

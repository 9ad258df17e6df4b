//! Performance instrumentation for the input hot paths.
//!
//! Move events arrive at pointer rate (60+ per second), so routing and hit
//! testing are timed when the `profiling` feature is enabled:
//!
//! ```ignore
//! fn handle(&mut self) {
//!     profile_scope!("route_event");
//!     // ... work ...
//! }
//! ```
//!
//! Without the feature the macro expands to nothing.

use crate::constants::SLOW_HANDLER_MS;
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::with_default_threshold($name);
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

/// RAII timer: warns on drop when the scope ran longer than its threshold.
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

    /// Timer with the default slow-handler threshold.
    pub fn with_default_threshold(name: &'static str) -> Self {
        Self::new(name, SLOW_HANDLER_MS)
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
                threshold_ms = self.threshold_ms,
                "Slow input handling"
            );
        }
        #[cfg(feature = "profiling")]
        trace!(operation = self.name, elapsed_ms = ms, "timed");
    }
}

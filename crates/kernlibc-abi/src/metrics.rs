//! Atomic counters for boundary observability.
//!
//! All counters use relaxed ordering; they are advisory and never used for
//! synchronization. The kernel reads them through [`AbiMetrics::snapshot`]
//! and prints them through its own logger.

use core::sync::atomic::{AtomicUsize, Ordering};

/// Global ABI event counters.
pub struct AbiMetrics {
    /// `snprintf_args` calls whose output was cut at the capacity.
    pub format_truncations: AtomicUsize,
    /// `strtol`/`strtoul` calls that saturated at a limit.
    pub conversion_saturations: AtomicUsize,
    /// Times the legacy `strtok` cursor ran off the end and went back to null.
    pub tokenizer_resets: AtomicUsize,
}

impl AbiMetrics {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            format_truncations: AtomicUsize::new(0),
            conversion_saturations: AtomicUsize::new(0),
            tokenizer_resets: AtomicUsize::new(0),
        }
    }

    /// Increment a counter by 1.
    pub fn inc(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            format_truncations: Self::get(&self.format_truncations),
            conversion_saturations: Self::get(&self.conversion_saturations),
            tokenizer_resets: Self::get(&self.tokenizer_resets),
        }
    }
}

impl Default for AbiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub format_truncations: usize,
    pub conversion_saturations: usize,
    pub tokenizer_resets: usize,
}

impl MetricsSnapshot {
    /// Per-counter growth since an earlier snapshot.
    #[must_use]
    pub fn since(&self, earlier: &Self) -> Self {
        Self {
            format_truncations: self.format_truncations.wrapping_sub(earlier.format_truncations),
            conversion_saturations: self
                .conversion_saturations
                .wrapping_sub(earlier.conversion_saturations),
            tokenizer_resets: self.tokenizer_resets.wrapping_sub(earlier.tokenizer_resets),
        }
    }
}

static GLOBAL_METRICS: AbiMetrics = AbiMetrics::new();

/// Access the global metrics singleton.
#[must_use]
pub fn global_metrics() -> &'static AbiMetrics {
    &GLOBAL_METRICS
}

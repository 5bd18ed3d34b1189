// crates/todo-harness-core/src/metrics.rs
// ============================================================================
// Module: Response Time Metrics
// Description: Elapsed-duration sample collection for client calls.
// Purpose: Aggregate per-call latencies into min/max/mean summaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A [`ResponseTimes`] value collects one elapsed-duration sample per client
//! call and answers min/max/mean queries over the ordered sequence. Samples
//! are ephemeral; nothing is persisted. Aggregates over an empty sequence
//! return `None` rather than a zero that could mask a suite that measured
//! nothing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;
use std::time::Instant;

// ============================================================================
// SECTION: Response Times
// ============================================================================

/// Ordered collection of elapsed-duration samples.
///
/// # Invariants
/// - Samples are append-only and retain insertion order.
#[derive(Debug, Clone, Default)]
pub struct ResponseTimes {
    /// Recorded samples in insertion order.
    samples: Vec<Duration>,
}

impl ResponseTimes {
    /// Creates an empty sample collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Records one elapsed-duration sample.
    pub fn record(&mut self, sample: Duration) {
        self.samples.push(sample);
    }

    /// Times a closure, records the elapsed duration, and returns the
    /// closure's result alongside the sample.
    pub fn measure<T>(&mut self, operation: impl FnOnce() -> T) -> (T, Duration) {
        let start = Instant::now();
        let value = operation();
        let elapsed = start.elapsed();
        self.record(elapsed);
        (value, elapsed)
    }

    /// Returns the number of recorded samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true when no samples have been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the smallest recorded sample, if any.
    #[must_use]
    pub fn min(&self) -> Option<Duration> {
        self.samples.iter().copied().min()
    }

    /// Returns the largest recorded sample, if any.
    #[must_use]
    pub fn max(&self) -> Option<Duration> {
        self.samples.iter().copied().max()
    }

    /// Returns the arithmetic mean of the recorded samples, if any.
    #[must_use]
    pub fn mean(&self) -> Option<Duration> {
        let count = u32::try_from(self.samples.len()).ok()?;
        if count == 0 {
            return None;
        }
        let total: Duration = self.samples.iter().copied().sum();
        Some(total / count)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

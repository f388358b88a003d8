//! Selector statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics tracked by a selector.
///
/// Counters are atomic so a [`SharedSelector`](crate::selection::SharedSelector)
/// can report them without taking its lock. All operations use
/// `Ordering::Relaxed`; counters are independent of each other.
///
/// # Example
/// ```
/// use mealpick::SelectionStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = SelectionStats::new();
/// stats.selections.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.snapshot().selections, 1);
/// ```
#[derive(Debug)]
pub struct SelectionStats {
    /// Successful selections.
    pub selections: AtomicU64,

    /// Draws that landed on a cached id and were retried.
    pub rejected_draws: AtomicU64,

    /// Times every bounded draw was rejected and the cache was cleared.
    pub exhaustion_resets: AtomicU64,

    /// Cache entries evicted to make room for a new selection.
    pub evictions: AtomicU64,

    /// Explicit cache clears caused by a change of filter context.
    pub context_resets: AtomicU64,
}

impl SelectionStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            selections: AtomicU64::new(0),
            rejected_draws: AtomicU64::new(0),
            exhaustion_resets: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            context_resets: AtomicU64::new(0),
        }
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            selections: self.selections.load(Ordering::Relaxed),
            rejected_draws: self.rejected_draws.load(Ordering::Relaxed),
            exhaustion_resets: self.exhaustion_resets.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            context_resets: self.context_resets.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.selections.store(0, Ordering::Relaxed);
        self.rejected_draws.store(0, Ordering::Relaxed);
        self.exhaustion_resets.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        self.context_resets.store(0, Ordering::Relaxed);
    }
}

impl Default for SelectionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of selector statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub selections: u64,
    pub rejected_draws: u64,
    pub exhaustion_resets: u64,
    pub evictions: u64,
    pub context_resets: u64,
}

impl StatsSnapshot {
    /// Fraction of draws that hit the recency cache (0.0 to 1.0).
    ///
    /// Each selection accounts for one accepted draw plus its rejections.
    pub fn rejection_rate(&self) -> f64 {
        let total = self.selections + self.rejected_draws;
        if total == 0 {
            0.0
        } else {
            self.rejected_draws as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ selections: {}, rejected: {}, resets: {}, context_resets: {}, evictions: {}, rejection_rate: {:.2}% }}",
            self.selections,
            self.rejected_draws,
            self.exhaustion_resets,
            self.context_resets,
            self.evictions,
            self.rejection_rate() * 100.0
        )
    }
}

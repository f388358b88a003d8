//! Selector that owns its recency cache.

use std::hash::Hash;
use std::sync::atomic::Ordering;

use rand::Rng;
use tracing::debug;

use crate::common::{Result, SelectorConfig};
use crate::selection::{select_detailed, RecencyCache, SelectionStats};

/// Bundles the selection policy with the cache lifecycle.
///
/// The cache is created empty, grows with every [`pick`](Self::pick), and
/// is cleared by [`reset`](Self::reset) when the candidate pool changes
/// meaning (e.g. the user switches filter).
///
/// # Usage
/// ```
/// use mealpick::{RecencySelector, SelectorConfig};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut selector = RecencySelector::new(SelectorConfig::new(2, 5).unwrap());
///
/// let first = *selector.pick(&["A", "B", "C"], &mut rng).unwrap();
/// assert!(selector.cache().contains(&first));
///
/// selector.reset();
/// assert!(selector.cache().is_empty());
/// ```
#[derive(Debug)]
pub struct RecencySelector<T> {
    cache: RecencyCache<T>,
    config: SelectorConfig,
    stats: SelectionStats,
}

impl<T: Eq + Hash + Clone> RecencySelector<T> {
    /// Create a selector with an empty cache sized from `config`.
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            cache: RecencyCache::new(config.cache_capacity),
            config,
            stats: SelectionStats::new(),
        }
    }

    /// Select a candidate and record it as recently shown.
    ///
    /// Inserting may evict the oldest cached id.
    ///
    /// # Errors
    /// `Error::EmptyCandidateList` if `candidates` is empty.
    pub fn pick<'a, R>(&mut self, candidates: &'a [T], rng: &mut R) -> Result<&'a T>
    where
        R: Rng + ?Sized,
    {
        let selection =
            select_detailed(candidates, &mut self.cache, self.config.max_attempts, rng)?;

        self.stats.selections.fetch_add(1, Ordering::Relaxed);
        self.stats
            .rejected_draws
            .fetch_add((selection.attempts - 1) as u64, Ordering::Relaxed);
        if selection.reset {
            self.stats.exhaustion_resets.fetch_add(1, Ordering::Relaxed);
        }

        if self.cache.insert(selection.item.clone()).is_some() {
            self.stats.evictions.fetch_add(1, Ordering::Relaxed);
        }

        Ok(selection.item)
    }

    /// Clear the recency cache for a new candidate pool.
    pub fn reset(&mut self) {
        debug!(cleared = self.cache.len(), "recency cache reset");
        self.cache.clear();
        self.stats.context_resets.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache(&self) -> &RecencyCache<T> {
        &self.cache
    }

    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    pub fn stats(&self) -> &SelectionStats {
        &self.stats
    }
}

impl<T: Eq + Hash + Clone> Default for RecencySelector<T> {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

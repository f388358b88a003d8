//! Thread-safe selector wrapper.

use std::hash::Hash;

use parking_lot::Mutex;
use rand::Rng;

use crate::common::{Result, SelectorConfig};
use crate::selection::{RecencySelector, StatsSnapshot};

/// A [`RecencySelector`] behind a mutex.
///
/// The check-then-insert sequence of a pick must not interleave with
/// another pick, otherwise two callers can both see an id as uncached and
/// both return it. Holding the lock across the whole pick rules that out.
///
/// Returns owned ids, since the lock is released before returning.
///
/// # Example
/// ```
/// use mealpick::{SelectorConfig, SharedSelector};
/// use std::sync::Arc;
///
/// let selector = Arc::new(SharedSelector::new(SelectorConfig::default()));
/// let picked = selector.pick(&["A", "B"], &mut rand::thread_rng()).unwrap();
/// assert!(picked == "A" || picked == "B");
/// ```
#[derive(Debug)]
pub struct SharedSelector<T> {
    inner: Mutex<RecencySelector<T>>,
}

impl<T: Eq + Hash + Clone> SharedSelector<T> {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            inner: Mutex::new(RecencySelector::new(config)),
        }
    }

    /// Select and record a candidate while holding the lock.
    ///
    /// # Errors
    /// `Error::EmptyCandidateList` if `candidates` is empty.
    pub fn pick<R>(&self, candidates: &[T], rng: &mut R) -> Result<T>
    where
        R: Rng + ?Sized,
    {
        let mut selector = self.inner.lock();
        selector.pick(candidates, rng).cloned()
    }

    /// Clear the recency cache.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Ids currently cached, oldest first.
    pub fn cached(&self) -> Vec<T> {
        self.inner.lock().cache().iter().cloned().collect()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.inner.lock().stats().snapshot()
    }
}

impl<T: Eq + Hash + Clone> From<RecencySelector<T>> for SharedSelector<T> {
    fn from(selector: RecencySelector<T>) -> Self {
        Self {
            inner: Mutex::new(selector),
        }
    }
}

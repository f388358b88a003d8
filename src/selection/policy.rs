//! Bounded-retry-then-reset selection policy.
//!
//! Up to `max_attempts` uniform draws are made, returning the first id that
//! is not in the recency cache. If every draw lands on a cached id, the
//! cache is cleared and one more uniform draw is returned unconditionally.
//! Work per call is therefore bounded by `max_attempts + 1` draws no matter
//! how small the candidate pool is.

use std::hash::Hash;

use rand::Rng;
use tracing::{debug, trace};

use crate::common::{Error, Result};
use crate::selection::RecencyCache;

/// Outcome of one selection, with the details the stats layer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a, T> {
    /// The chosen id (borrowed from the candidate list).
    pub item: &'a T,

    /// Position of `item` in the candidate list.
    pub index: usize,

    /// Draws performed, including the fallback draw after a reset.
    pub attempts: usize,

    /// Whether every bounded draw hit the cache and the cache was cleared.
    pub reset: bool,
}

/// Pick a candidate that was not recently shown.
///
/// Does not insert the result into `cache`; see
/// [`RecencySelector::pick`](crate::selection::RecencySelector::pick) for
/// the variant that does.
///
/// # Errors
/// `Error::EmptyCandidateList` if `candidates` is empty.
///
/// # Example
/// ```
/// use mealpick::{select, RecencyCache};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut cache = RecencyCache::new(2);
/// cache.insert("A");
///
/// let picked = select(&["A", "B"], &mut cache, 5, &mut rng).unwrap();
/// assert!(*picked == "A" || *picked == "B");
/// ```
pub fn select<'a, T, R>(
    candidates: &'a [T],
    cache: &mut RecencyCache<T>,
    max_attempts: usize,
    rng: &mut R,
) -> Result<&'a T>
where
    T: Eq + Hash + Clone,
    R: Rng + ?Sized,
{
    select_detailed(candidates, cache, max_attempts, rng).map(|s| s.item)
}

/// Same policy as [`select`], reporting how the choice was made.
///
/// With `max_attempts == 0` no bounded draws happen, so the cache is
/// cleared and the fallback draw is taken directly.
///
/// # Errors
/// `Error::EmptyCandidateList` if `candidates` is empty.
pub fn select_detailed<'a, T, R>(
    candidates: &'a [T],
    cache: &mut RecencyCache<T>,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Selection<'a, T>>
where
    T: Eq + Hash + Clone,
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(Error::EmptyCandidateList);
    }

    for attempt in 1..=max_attempts {
        let index = rng.gen_range(0..candidates.len());
        let item = &candidates[index];

        if !cache.contains(item) {
            trace!(index, attempt, "selected uncached candidate");
            return Ok(Selection {
                item,
                index,
                attempts: attempt,
                reset: false,
            });
        }
    }

    // Exhausted: start afresh rather than search the pool exhaustively.
    debug!(
        max_attempts,
        cached = cache.len(),
        candidates = candidates.len(),
        "all draws hit the recency cache, clearing it"
    );
    cache.clear();

    let index = rng.gen_range(0..candidates.len());
    Ok(Selection {
        item: &candidates[index],
        index,
        attempts: max_attempts + 1,
        reset: true,
    })
}

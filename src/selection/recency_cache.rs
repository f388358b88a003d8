//! FIFO (First-In-First-Out) recency cache.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// A bounded, insertion-ordered set of recently selected ids.
///
/// Eviction removes the oldest inserted entry. Re-inserting an id that is
/// already cached does NOT move it to the back of the queue.
///
/// A capacity of 0 disables the cache: inserts are ignored and
/// `contains` is always false.
///
/// # Example
/// ```
/// use mealpick::RecencyCache;
///
/// let mut cache = RecencyCache::new(2);
/// cache.insert("a");
/// cache.insert("b");
/// assert_eq!(cache.insert("c"), Some("a"));
/// assert!(!cache.contains(&"a"));
/// ```
#[derive(Debug, Clone)]
pub struct RecencyCache<T> {
    /// Ids in insertion order (front = oldest).
    queue: VecDeque<T>,

    /// Set for O(1) membership check.
    members: HashSet<T>,

    /// Maximum number of entries (immutable after construction).
    capacity: usize,
}

impl<T: Eq + Hash + Clone> RecencyCache<T> {
    /// Create an empty cache holding at most `capacity` ids.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Whether `id` was recently selected.
    #[inline]
    pub fn contains(&self, id: &T) -> bool {
        self.members.contains(id)
    }

    /// Record `id` as selected.
    ///
    /// If the cache is full, the oldest entry is evicted first and
    /// returned. Inserting an id that is already present is a no-op.
    pub fn insert(&mut self, id: T) -> Option<T> {
        if self.capacity == 0 || self.members.contains(&id) {
            return None;
        }

        let evicted = if self.queue.len() == self.capacity {
            let oldest = self.queue.pop_front();
            if let Some(old) = &oldest {
                self.members.remove(old);
            }
            oldest
        } else {
            None
        };

        self.members.insert(id.clone());
        self.queue.push_back(id);
        evicted
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.members.clear();
    }

    /// Number of cached ids.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cached ids, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.queue.iter()
    }
}

impl<T: Eq + Hash + Clone> Default for RecencyCache<T> {
    fn default() -> Self {
        Self::new(crate::common::config::DEFAULT_CACHE_CAPACITY)
    }
}

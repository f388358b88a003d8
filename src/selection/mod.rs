//! Repeat-avoiding random selection.
//!
//! # Components
//! - [`RecencyCache`] - Bounded FIFO record of recently chosen ids
//! - [`select`] / [`select_detailed`] - The bounded-retry-then-reset policy
//! - [`RecencySelector`] - Cache + config + stats, with the post-selection insert
//! - [`SharedSelector`] - Mutex-guarded selector for use across threads
//! - [`SelectionStats`] - Counters describing selector behaviour

mod policy;
mod recency_cache;
mod recency_selector;
mod shared;
mod stats;

pub use policy::{select, select_detailed, Selection};
pub use recency_cache::RecencyCache;
pub use recency_selector::RecencySelector;
pub use shared::SharedSelector;
pub use stats::{SelectionStats, StatsSnapshot};

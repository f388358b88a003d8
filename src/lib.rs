//! mealpick - random recipe selection that avoids recent repeats.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           mealpick                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Browsing Flow (browser/)                    │   │
//! │  │   Filter change → candidates → select → fetch → render   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Selection (selection/)                      │   │
//! │  │   bounded random draws → exhaustion reset → FIFO cache   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Recipe Records (recipe/)                    │   │
//! │  │      Meal + Ingredient, service payloads, Filter         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (RecipeId, Error, config)
//! - [`selection`] - Recency cache and the selection policy
//! - [`recipe`] - Meal records and payload parsing
//! - [`browser`] - Collaborator traits and the browsing session
//!
//! # Quick Start
//! ```
//! use mealpick::{RecencySelector, SelectorConfig};
//!
//! let mut selector = RecencySelector::new(SelectorConfig::default());
//! let mut rng = rand::thread_rng();
//!
//! let candidates = ["52772", "52804", "52940"];
//! let first = *selector.pick(&candidates, &mut rng).unwrap();
//! let second = *selector.pick(&candidates, &mut rng).unwrap();
//! assert!(candidates.contains(&first) && candidates.contains(&second));
//! ```

pub mod browser;
pub mod common;
pub mod recipe;
pub mod selection;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, RecipeId, Result, SelectorConfig};

pub use browser::{Catalog, RecipeBrowser};
pub use recipe::{Filter, Meal};
pub use selection::{
    select, RecencyCache, RecencySelector, SelectionStats, SharedSelector, StatsSnapshot,
};

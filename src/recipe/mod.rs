//! Recipe records and recipe-service payloads.
//!
//! The recipe service wraps every response in a `{"meals": [...]}`
//! envelope, with `"meals": null` meaning "nothing found". This module
//! turns those payloads into typed values; it performs no I/O.

mod filter;
mod meal;
mod payload;

pub use filter::{Filter, FilterKind};
pub use meal::{Ingredient, Meal};
pub use payload::{parse_candidates, parse_filter_options, parse_meals};

//! The recipe browsing flow.
//!
//! A [`RecipeBrowser`] drives one logical sequence at a time: ask the
//! [`CandidateSource`] for ids matching the active [`Filter`](crate::recipe::Filter),
//! let the recency selector choose one, fetch its record through the
//! [`DetailFetcher`], and hand it to a [`Renderer`]. HTTP, page rendering and
//! clipboard access live behind these traits.

mod session;
mod source;

pub use session::RecipeBrowser;
pub use source::{CandidateSource, Catalog, DetailFetcher, Renderer};

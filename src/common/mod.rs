//! Common types and utilities shared across mealpick.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`SelectorConfig`]
//! - Error types
//! - Identifiers ([`RecipeId`])

pub mod config;
pub mod error;
mod recipe_id;

pub use config::SelectorConfig;
pub use error::{Error, Result};
pub use recipe_id::RecipeId;

//! Error types for mealpick.

use thiserror::Error as ThisError;

use crate::common::RecipeId;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in mealpick.
///
/// Cache exhaustion is deliberately absent: the selector recovers from it
/// by resetting the cache, so it never surfaces to callers.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The selector was handed nothing to choose from.
    #[error("Cannot select from an empty candidate list")]
    EmptyCandidateList,

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The candidate source had no recipes for the active filter.
    #[error("No recipes match {0}")]
    NoMatches(String),

    /// The detail fetcher has no record for a selected id.
    #[error("{0} not found")]
    RecipeNotFound(RecipeId),

    /// Transport or service failure reported by a collaborator.
    #[error("Recipe service error: {0}")]
    Source(String),

    /// The service returned a payload we could not parse.
    #[error("Malformed recipe payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Message suitable for showing in place of a recipe.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::NoMatches(_) | Error::RecipeNotFound(_) | Error::EmptyCandidateList => {
                "No recipe found. Please try again."
            }
            _ => "An error occurred while fetching the recipe. Please try again later.",
        }
    }
}

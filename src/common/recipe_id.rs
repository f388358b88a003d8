//! Recipe identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a recipe at the recipe service.
///
/// The service hands out numeric strings (`"52772"`), but nothing here
/// depends on that: the id is opaque and only compared for equality.
///
/// # Example
/// ```
/// use mealpick::RecipeId;
///
/// let id = RecipeId::new("52772");
/// assert_eq!(id.as_str(), "52772");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Create a new RecipeId.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        RecipeId(id.into())
    }

    /// Borrow the raw identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Recipe({})", self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        RecipeId::new(id)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        RecipeId(id)
    }
}

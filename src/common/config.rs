//! Configuration for mealpick.

use crate::common::{Error, Result};

/// Number of recently shown recipes remembered by default (K).
///
/// Large enough to stop back-to-back repeats on a full catalogue, small
/// enough that a narrow filter with a handful of matches still cycles.
pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Random draws attempted before the recency cache is given up on.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Base URL of the public recipe service.
pub const API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";

/// Base URL for ingredient thumbnails.
pub const INGREDIENT_IMAGE_URL: &str = "https://www.themealdb.com/images/ingredients/";

/// Number of numbered ingredient/measure slots in a meal record.
pub const MAX_INGREDIENTS: usize = 20;

/// Tuning for a [`RecencySelector`](crate::selection::RecencySelector).
///
/// # Example
/// ```
/// use mealpick::SelectorConfig;
///
/// let config = SelectorConfig::new(3, 5).unwrap();
/// assert!(config.anti_repetition_enabled());
///
/// // Zero draws can never succeed.
/// assert!(SelectorConfig::new(3, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Capacity of the recency cache. Zero disables anti-repetition.
    pub cache_capacity: usize,

    /// Draws attempted before falling back to clear-and-draw.
    pub max_attempts: usize,
}

impl SelectorConfig {
    /// Create a validated config.
    ///
    /// # Errors
    /// `Error::InvalidConfig` if `max_attempts` is 0.
    pub fn new(cache_capacity: usize, max_attempts: usize) -> Result<Self> {
        if max_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            cache_capacity,
            max_attempts,
        })
    }

    /// Whether recently shown recipes are avoided at all.
    #[inline]
    pub fn anti_repetition_enabled(&self) -> bool {
        self.cache_capacity > 0
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SelectorConfig::default();
        assert_eq!(config.cache_capacity, 10);
        assert_eq!(config.max_attempts, 5);
        assert!(config.anti_repetition_enabled());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        match SelectorConfig::new(10, 0) {
            Err(Error::InvalidConfig(msg)) => assert!(msg.contains("max_attempts")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_capacity_disables_anti_repetition() {
        let config = SelectorConfig::new(0, 5).unwrap();
        assert!(!config.anti_repetition_enabled());
    }

    #[test]
    fn test_urls_end_with_slash() {
        assert!(API_BASE_URL.ends_with('/'));
        assert!(INGREDIENT_IMAGE_URL.ends_with('/'));
    }
}

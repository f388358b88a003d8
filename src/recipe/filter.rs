//! Candidate-pool filters.

use std::fmt;

use url::form_urlencoded::byte_serialize;

/// Which dimension a [`Filter`] narrows on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Dish category (`Seafood`, `Vegetarian`, `Vegan`, ...).
    Category,
    /// Cuisine by country (`Canadian`, `Thai`, ...).
    Area,
}

impl FilterKind {
    /// Endpoint listing every value of this dimension.
    pub fn list_endpoint(self) -> &'static str {
        match self {
            FilterKind::Category => "list.php?c=list",
            FilterKind::Area => "list.php?a=list",
        }
    }

    /// Field name carrying the value in a list payload.
    pub(crate) fn field(self) -> &'static str {
        match self {
            FilterKind::Category => "strCategory",
            FilterKind::Area => "strArea",
        }
    }
}

/// The active filter context.
///
/// Changing it invalidates the recency cache, since ids remembered for one
/// candidate pool say nothing about another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// No narrowing: any recipe.
    #[default]
    Any,
    Category(String),
    Area(String),
}

impl Filter {
    /// Build a filter from a dropdown value; an empty value means [`Filter::Any`].
    pub fn from_choice(kind: FilterKind, value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return Filter::Any;
        }
        match kind {
            FilterKind::Category => Filter::Category(value.to_string()),
            FilterKind::Area => Filter::Area(value.to_string()),
        }
    }

    pub fn kind(&self) -> Option<FilterKind> {
        match self {
            Filter::Any => None,
            Filter::Category(_) => Some(FilterKind::Category),
            Filter::Area(_) => Some(FilterKind::Area),
        }
    }

    /// Service endpoint (relative to
    /// [`API_BASE_URL`](crate::common::config::API_BASE_URL)) answering this filter.
    pub fn endpoint(&self) -> String {
        match self {
            Filter::Any => "random.php".to_string(),
            Filter::Category(value) => format!("filter.php?c={}", encode_query_value(value)),
            Filter::Area(value) => format!("filter.php?a={}", encode_query_value(value)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Any => write!(f, "any recipe"),
            Filter::Category(c) => write!(f, "category {}", c),
            Filter::Area(a) => write!(f, "area {}", a),
        }
    }
}

fn encode_query_value(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

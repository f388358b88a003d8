//! Parsing of recipe-service response bodies.

use std::collections::HashMap;

use serde::Deserialize;

use crate::common::{RecipeId, Result};
use crate::recipe::meal::RawMeal;
use crate::recipe::{FilterKind, Meal};

/// `{"meals": [...]}`, where `null` stands for an empty result.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    meals: Option<Vec<T>>,
}

impl<T> Envelope<T> {
    fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// Summary row returned by filter endpoints.
#[derive(Debug, Deserialize)]
struct MealSummary {
    #[serde(rename = "idMeal")]
    id: RecipeId,
}

/// Parse full meal records from a lookup or random endpoint.
///
/// # Errors
/// `Error::Json` if the body is not a meal envelope.
pub fn parse_meals(json: &str) -> Result<Vec<Meal>> {
    let envelope: Envelope<RawMeal> = serde_json::from_str(json)?;
    Ok(envelope.into_vec().into_iter().map(Meal::from).collect())
}

/// Parse the candidate ids returned by a filter endpoint.
///
/// Order and duplicates are preserved.
///
/// # Errors
/// `Error::Json` if the body is not a meal envelope.
///
/// # Example
/// ```
/// use mealpick::recipe::parse_candidates;
///
/// let ids = parse_candidates(r#"{"meals":[{"strMeal":"Poutine","idMeal":"52804"}]}"#).unwrap();
/// assert_eq!(ids[0].as_str(), "52804");
///
/// assert!(parse_candidates(r#"{"meals":null}"#).unwrap().is_empty());
/// ```
pub fn parse_candidates(json: &str) -> Result<Vec<RecipeId>> {
    let envelope: Envelope<MealSummary> = serde_json::from_str(json)?;
    Ok(envelope.into_vec().into_iter().map(|m| m.id).collect())
}

/// Parse the values offered for a filter dimension (dropdown contents).
///
/// Rows without the expected field, or with a blank value, are skipped.
///
/// # Errors
/// `Error::Json` if the body is not a meal envelope.
pub fn parse_filter_options(kind: FilterKind, json: &str) -> Result<Vec<String>> {
    let envelope: Envelope<HashMap<String, Option<String>>> = serde_json::from_str(json)?;
    Ok(envelope
        .into_vec()
        .into_iter()
        .filter_map(|mut row| row.remove(kind.field()).flatten())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect())
}

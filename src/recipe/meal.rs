//! Meal records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::config::{INGREDIENT_IMAGE_URL, MAX_INGREDIENTS};
use crate::common::RecipeId;

/// One line of a meal's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Free-form quantity (`"1 tbs"`, `"to taste"`); may be empty.
    pub measure: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measure: measure.into(),
        }
    }

    /// `"{measure} {name}"`, trimmed so an empty measure leaves no gap.
    pub fn display_text(&self) -> String {
        format!("{} {}", self.measure.trim(), self.name.trim())
            .trim()
            .to_string()
    }

    /// Small thumbnail for this ingredient at the recipe service.
    pub fn image_url(&self) -> String {
        format!(
            "{}{}-Small.png",
            INGREDIENT_IMAGE_URL,
            self.name.trim().replace(char::is_whitespace, "%20")
        )
    }
}

/// A complete recipe as returned by a detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    pub id: RecipeId,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: String,
    pub thumbnail: Option<String>,
    pub youtube: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl Meal {
    /// Plain-text ingredient list for the clipboard.
    ///
    /// Returns `None` when there is nothing to copy.
    ///
    /// # Example
    /// ```
    /// use mealpick::recipe::{Ingredient, Meal};
    /// use mealpick::RecipeId;
    ///
    /// let meal = Meal {
    ///     id: RecipeId::new("1"),
    ///     name: "Toast".into(),
    ///     category: None,
    ///     area: None,
    ///     instructions: String::new(),
    ///     thumbnail: None,
    ///     youtube: None,
    ///     ingredients: vec![Ingredient::new("Bread", "2 slices")],
    /// };
    /// assert_eq!(meal.ingredients_text().unwrap(), "Ingredients:\n- 2 slices Bread\n");
    /// ```
    pub fn ingredients_text(&self) -> Option<String> {
        if self.ingredients.is_empty() {
            return None;
        }
        let mut text = String::from("Ingredients:\n");
        for ingredient in &self.ingredients {
            text.push_str("- ");
            text.push_str(&ingredient.display_text());
            text.push('\n');
        }
        Some(text)
    }
}

/// Wire shape of a meal. Ingredient slots are numbered fields
/// (`strIngredient1`..`strIngredient20`, `strMeasure1`..), so they are
/// collected through the flattened map.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMeal {
    #[serde(rename = "idMeal")]
    id: RecipeId,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl From<RawMeal> for Meal {
    fn from(raw: RawMeal) -> Self {
        let slot = |prefix: &str, i: usize| -> Option<String> {
            raw.rest
                .get(&format!("{}{}", prefix, i))
                .and_then(Value::as_str)
                .map(|s| s.trim().to_string())
        };

        let ingredients = (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                let name = slot("strIngredient", i).filter(|n| !n.is_empty())?;
                let measure = slot("strMeasure", i).unwrap_or_default();
                Some(Ingredient { name, measure })
            })
            .collect();

        Meal {
            id: raw.id,
            name: raw.name,
            category: non_blank(raw.category),
            area: non_blank(raw.area),
            instructions: raw.instructions.unwrap_or_default(),
            thumbnail: non_blank(raw.thumbnail),
            youtube: non_blank(raw.youtube),
            ingredients,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

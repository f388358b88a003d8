//! Collaborator traits and an in-memory catalog.

use crate::common::{RecipeId, Result};
use crate::recipe::{parse_meals, Filter, Meal};

/// Supplies the ids matching a filter.
///
/// An empty list means "no matches"; transport failures are errors.
pub trait CandidateSource {
    fn candidates(&self, filter: &Filter) -> Result<Vec<RecipeId>>;
}

/// Looks up the full record for an id. `Ok(None)` means the service has
/// no such recipe.
pub trait DetailFetcher {
    fn fetch(&self, id: &RecipeId) -> Result<Option<Meal>>;
}

/// Presents a recipe, or an error message in its place.
pub trait Renderer {
    fn render(&mut self, meal: &Meal);
    fn render_error(&mut self, message: &str);
}

impl<S: CandidateSource + ?Sized> CandidateSource for &S {
    fn candidates(&self, filter: &Filter) -> Result<Vec<RecipeId>> {
        (**self).candidates(filter)
    }
}

impl<D: DetailFetcher + ?Sized> DetailFetcher for &D {
    fn fetch(&self, id: &RecipeId) -> Result<Option<Meal>> {
        (**self).fetch(id)
    }
}

/// A fixed set of meals answering both candidate and detail queries.
///
/// Filter values match case-insensitively, as the recipe service does.
///
/// # Example
/// ```
/// use mealpick::browser::{CandidateSource, Catalog};
/// use mealpick::recipe::Filter;
///
/// let catalog = Catalog::from_json(r#"{"meals":[
///     {"idMeal":"1","strMeal":"Pad Thai","strArea":"Thai"},
///     {"idMeal":"2","strMeal":"Poutine","strArea":"Canadian"}
/// ]}"#).unwrap();
///
/// let ids = catalog.candidates(&Filter::Area("thai".into())).unwrap();
/// assert_eq!(ids.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    meals: Vec<Meal>,
}

impl Catalog {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    /// Build a catalog from a service payload.
    ///
    /// # Errors
    /// `Error::Json` if the payload is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(parse_meals(json)?))
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    fn matches(meal: &Meal, filter: &Filter) -> bool {
        let eq = |field: &Option<String>, wanted: &str| {
            field
                .as_deref()
                .is_some_and(|v| v.eq_ignore_ascii_case(wanted))
        };
        match filter {
            Filter::Any => true,
            Filter::Category(c) => eq(&meal.category, c),
            Filter::Area(a) => eq(&meal.area, a),
        }
    }
}

impl CandidateSource for Catalog {
    fn candidates(&self, filter: &Filter) -> Result<Vec<RecipeId>> {
        Ok(self
            .meals
            .iter()
            .filter(|meal| Self::matches(meal, filter))
            .map(|meal| meal.id.clone())
            .collect())
    }
}

impl DetailFetcher for Catalog {
    fn fetch(&self, id: &RecipeId) -> Result<Option<Meal>> {
        Ok(self.meals.iter().find(|meal| &meal.id == id).cloned())
    }
}

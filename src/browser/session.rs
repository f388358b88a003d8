//! Single-flow browsing session.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::browser::{CandidateSource, DetailFetcher, Renderer};
use crate::common::{Error, RecipeId, Result, SelectorConfig};
use crate::recipe::{Filter, Meal};
use crate::selection::RecencySelector;

/// Fetches, selects and renders recipes for one user.
///
/// Owns the recency state for the current filter context. Only one
/// `next_recipe` runs at a time (it takes `&mut self`), so the selector
/// needs no locking here.
///
/// # Usage
/// ```
/// use mealpick::browser::{Catalog, RecipeBrowser, Renderer};
/// use mealpick::recipe::{Filter, Meal};
/// use mealpick::SelectorConfig;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// struct Quiet;
/// impl Renderer for Quiet {
///     fn render(&mut self, _meal: &Meal) {}
///     fn render_error(&mut self, _message: &str) {}
/// }
///
/// let catalog = Catalog::from_json(r#"{"meals":[{"idMeal":"1","strMeal":"Soup"}]}"#).unwrap();
/// let mut browser = RecipeBrowser::new(&catalog, &catalog, SelectorConfig::default(), StdRng::seed_from_u64(0));
///
/// let meal = browser.next_recipe(&mut Quiet).unwrap();
/// assert_eq!(meal.name, "Soup");
/// ```
pub struct RecipeBrowser<S, D, R> {
    source: S,
    fetcher: D,
    selector: RecencySelector<RecipeId>,
    filter: Filter,
    rng: R,
    current: Option<Meal>,
}

impl<S, D, R> RecipeBrowser<S, D, R>
where
    S: CandidateSource,
    D: DetailFetcher,
    R: Rng,
{
    /// Start a session with no filter and an empty recency cache.
    pub fn new(source: S, fetcher: D, config: SelectorConfig, rng: R) -> Self {
        Self {
            source,
            fetcher,
            selector: RecencySelector::new(config),
            filter: Filter::Any,
            rng,
            current: None,
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Switch filter context.
    ///
    /// Clears the recency cache when the filter actually changes and
    /// returns whether it did.
    pub fn set_filter(&mut self, filter: Filter) -> bool {
        if filter == self.filter {
            return false;
        }
        info!(from = %self.filter, to = %filter, "filter changed");
        self.filter = filter;
        self.selector.reset();
        true
    }

    /// Select, fetch and render the next recipe.
    ///
    /// On failure the renderer is shown a user-facing message, the
    /// current recipe is dropped, and the error is returned.
    ///
    /// The chosen id enters the recency cache before its detail fetch, so
    /// an id whose fetch fails stays cached even though it was never shown.
    ///
    /// # Errors
    /// - `Error::NoMatches` if the filter matches nothing
    /// - `Error::RecipeNotFound` if the chosen id has no record
    /// - any error raised by the source or fetcher
    pub fn next_recipe<V>(&mut self, renderer: &mut V) -> Result<&Meal>
    where
        V: Renderer + ?Sized,
    {
        match self.fetch_next() {
            Ok(meal) => {
                let meal = self.current.insert(meal);
                renderer.render(meal);
                Ok(&*meal)
            }
            Err(e) => {
                warn!(filter = %self.filter, error = %e, "failed to fetch recipe");
                self.current = None;
                renderer.render_error(e.user_message());
                Err(e)
            }
        }
    }

    fn fetch_next(&mut self) -> Result<Meal> {
        let candidates = self.source.candidates(&self.filter)?;
        if candidates.is_empty() {
            return Err(Error::NoMatches(self.filter.to_string()));
        }

        let id = self.selector.pick(&candidates, &mut self.rng)?.clone();
        debug!(%id, filter = %self.filter, pool = candidates.len(), "selected recipe");

        self.fetcher.fetch(&id)?.ok_or(Error::RecipeNotFound(id))
    }

    /// The recipe on display, if the last fetch succeeded.
    pub fn current(&self) -> Option<&Meal> {
        self.current.as_ref()
    }

    /// Clipboard text for the recipe on display.
    pub fn ingredients_text(&self) -> Option<String> {
        self.current.as_ref().and_then(Meal::ingredients_text)
    }

    pub fn selector(&self) -> &RecencySelector<RecipeId> {
        &self.selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::Catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct Recorder {
        shown: Vec<String>,
        errors: Vec<String>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, meal: &Meal) {
            self.shown.push(meal.name.clone());
        }

        fn render_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    struct FailingSource;

    impl CandidateSource for FailingSource {
        fn candidates(&self, _filter: &Filter) -> Result<Vec<RecipeId>> {
            Err(Error::Source("HTTP error! status: 503".into()))
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"meals":[
                {"idMeal":"1","strMeal":"Pad Thai","strCategory":"Pasta","strArea":"Thai",
                 "strIngredient1":"Rice Noodles","strMeasure1":"200g"},
                {"idMeal":"2","strMeal":"Poutine","strCategory":"Miscellaneous","strArea":"Canadian"},
                {"idMeal":"3","strMeal":"Green Curry","strCategory":"Vegan","strArea":"Thai"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_next_recipe_renders_and_caches() {
        let catalog = catalog();
        let mut browser =
            RecipeBrowser::new(&catalog, &catalog, SelectorConfig::default(), StdRng::seed_from_u64(1));
        let mut renderer = Recorder::default();

        let name = browser.next_recipe(&mut renderer).unwrap().name.clone();

        assert_eq!(renderer.shown, vec![name]);
        assert_eq!(browser.selector().cache().len(), 1);
        assert!(browser.current().is_some());
    }

    #[test]
    fn test_set_filter_clears_cache_only_on_change() {
        let catalog = catalog();
        let mut browser =
            RecipeBrowser::new(&catalog, &catalog, SelectorConfig::default(), StdRng::seed_from_u64(2));
        let mut renderer = Recorder::default();
        browser.next_recipe(&mut renderer).unwrap();

        assert!(!browser.set_filter(Filter::Any));
        assert_eq!(browser.selector().cache().len(), 1);

        assert!(browser.set_filter(Filter::Area("Thai".into())));
        assert!(browser.selector().cache().is_empty());
        assert_eq!(browser.filter(), &Filter::Area("Thai".into()));
    }

    #[test]
    fn test_filtered_recipe_comes_from_pool() {
        let catalog = catalog();
        let mut browser =
            RecipeBrowser::new(&catalog, &catalog, SelectorConfig::default(), StdRng::seed_from_u64(3));
        browser.set_filter(Filter::Area("Canadian".into()));

        let meal = browser.next_recipe(&mut Recorder::default()).unwrap();
        assert_eq!(meal.name, "Poutine");
    }

    #[test]
    fn test_no_matches_reported() {
        let catalog = catalog();
        let mut browser =
            RecipeBrowser::new(&catalog, &catalog, SelectorConfig::default(), StdRng::seed_from_u64(4));
        let mut renderer = Recorder::default();
        browser.next_recipe(&mut renderer).unwrap();
        browser.set_filter(Filter::Category("Dessert".into()));

        match browser.next_recipe(&mut renderer) {
            Err(Error::NoMatches(filter)) => assert_eq!(filter, "category Dessert"),
            other => panic!("Expected NoMatches, got {:?}", other.map(|m| m.name.clone())),
        }
        assert_eq!(renderer.errors, vec!["No recipe found. Please try again.".to_string()]);
        assert!(browser.current().is_none());
        assert!(browser.ingredients_text().is_none());
    }

    #[test]
    fn test_missing_detail_reported() {
        let catalog = catalog();
        let empty = Catalog::default();
        let mut browser =
            RecipeBrowser::new(&catalog, &empty, SelectorConfig::default(), StdRng::seed_from_u64(5));

        assert!(matches!(
            browser.next_recipe(&mut Recorder::default()),
            Err(Error::RecipeNotFound(_))
        ));
        // The id was recorded before the failed fetch.
        assert_eq!(browser.selector().cache().len(), 1);
    }

    #[test]
    fn test_source_failure_reported() {
        let catalog = catalog();
        let mut browser =
            RecipeBrowser::new(FailingSource, &catalog, SelectorConfig::default(), StdRng::seed_from_u64(6));
        let mut renderer = Recorder::default();

        assert!(matches!(browser.next_recipe(&mut renderer), Err(Error::Source(_))));
        assert!(renderer.errors[0].contains("try again later"));
    }

    #[test]
    fn test_ingredients_text_for_current() {
        let catalog = catalog();
        let mut browser =
            RecipeBrowser::new(&catalog, &catalog, SelectorConfig::default(), StdRng::seed_from_u64(7));
        browser.set_filter(Filter::Category("Pasta".into()));
        browser.next_recipe(&mut Recorder::default()).unwrap();

        assert_eq!(
            browser.ingredients_text().unwrap(),
            "Ingredients:\n- 200g Rice Noodles\n"
        );
    }
}

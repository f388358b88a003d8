//! Integration tests for the browsing flow.
//!
//! These tests drive `RecipeBrowser` against an in-memory catalog built
//! from service-shaped JSON.

use std::collections::HashSet;

use mealpick::browser::{Catalog, RecipeBrowser, Renderer};
use mealpick::recipe::{parse_candidates, parse_filter_options, FilterKind};
use mealpick::{Error, Filter, Meal, SelectorConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CATALOG: &str = r#"{"meals":[
    {"idMeal":"52772","strMeal":"Teriyaki Chicken Casserole","strCategory":"Chicken","strArea":"Japanese",
     "strInstructions":"Preheat oven to 350F.","strMealThumb":"https://example.invalid/1.jpg",
     "strYoutube":"https://www.youtube.com/watch?v=4aZr5hZXP_s",
     "strIngredient1":"soy sauce","strMeasure1":"3/4 cup",
     "strIngredient2":"water","strMeasure2":"1/2 cup",
     "strIngredient3":"","strMeasure3":""},
    {"idMeal":"52804","strMeal":"Poutine","strCategory":"Miscellaneous","strArea":"Canadian",
     "strInstructions":"Fry the potatoes.","strYoutube":"",
     "strIngredient1":"Potatoes","strMeasure1":"2 large",
     "strIngredient2":"Cheese Curds","strMeasure2":"2 cups"},
    {"idMeal":"52928","strMeal":"BeaverTails","strCategory":"Dessert","strArea":"Canadian",
     "strInstructions":"Mix the dough.","strIngredient1":"Sugar","strMeasure1":"1/4 cup"},
    {"idMeal":"52870","strMeal":"Chickpea Fajitas","strCategory":"Vegetarian","strArea":"Mexican",
     "strInstructions":"Heat the oil.","strIngredient1":"Chickpeas","strMeasure1":"400g"},
    {"idMeal":"52942","strMeal":"Roast Fennel and Aubergine Paella","strCategory":"Vegan","strArea":"Spanish",
     "strInstructions":"Roast the vegetables.","strIngredient1":"Fennel","strMeasure1":"1"}
]}"#;

#[derive(Default)]
struct Page {
    shown: Vec<String>,
    errors: Vec<String>,
}

impl Renderer for Page {
    fn render(&mut self, meal: &Meal) {
        self.shown.push(meal.id.as_str().to_string());
    }

    fn render_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

fn catalog() -> Catalog {
    Catalog::from_json(CATALOG).unwrap()
}

/// Test that an unfiltered session shows every recipe before repeating one.
#[test]
fn test_unfiltered_session_avoids_repeats() {
    let catalog = catalog();
    let config = SelectorConfig::new(10, 200).unwrap();
    let mut browser = RecipeBrowser::new(&catalog, &catalog, config, StdRng::seed_from_u64(42));
    let mut page = Page::default();

    for _ in 0..catalog.len() {
        browser.next_recipe(&mut page).unwrap();
    }

    let distinct: HashSet<_> = page.shown.iter().collect();
    assert_eq!(distinct.len(), catalog.len());
    assert!(page.errors.is_empty());
}

/// Test cycling a filter smaller than the cache: it resets instead of stalling.
#[test]
fn test_small_pool_keeps_cycling() {
    let catalog = catalog();
    let mut browser = RecipeBrowser::new(
        &catalog,
        &catalog,
        SelectorConfig::default(),
        StdRng::seed_from_u64(7),
    );
    let mut page = Page::default();
    browser.set_filter(Filter::Area("Canadian".into()));

    for _ in 0..20 {
        let meal = browser.next_recipe(&mut page).unwrap();
        assert_eq!(meal.area.as_deref(), Some("Canadian"));
    }

    let stats = browser.selector().stats().snapshot();
    assert_eq!(stats.selections, 20);
    assert!(stats.exhaustion_resets > 0);
    assert!(browser.selector().cache().len() <= 2);
}

/// Test that switching filters starts a fresh recency context.
#[test]
fn test_filter_switch_resets_recency() {
    let catalog = catalog();
    let config = SelectorConfig::new(10, 200).unwrap();
    let mut browser = RecipeBrowser::new(&catalog, &catalog, config, StdRng::seed_from_u64(8));
    let mut page = Page::default();

    browser.next_recipe(&mut page).unwrap();
    browser.next_recipe(&mut page).unwrap();
    assert_eq!(browser.selector().cache().len(), 2);

    browser.set_filter(Filter::Category("Vegan".into()));
    assert!(browser.selector().cache().is_empty());

    let meal = browser.next_recipe(&mut page).unwrap();
    assert_eq!(meal.name, "Roast Fennel and Aubergine Paella");
    assert_eq!(browser.selector().stats().snapshot().context_resets, 1);
}

/// Test the copy-to-clipboard text for the recipe on display.
#[test]
fn test_clipboard_text_follows_current_recipe() {
    let catalog = catalog();
    let mut browser = RecipeBrowser::new(
        &catalog,
        &catalog,
        SelectorConfig::default(),
        StdRng::seed_from_u64(9),
    );
    let mut page = Page::default();
    browser.set_filter(Filter::Area("Japanese".into()));

    let meal = browser.next_recipe(&mut page).unwrap();
    assert!(meal.youtube.is_some());
    assert_eq!(
        browser.ingredients_text().unwrap(),
        "Ingredients:\n- 3/4 cup soy sauce\n- 1/2 cup water\n"
    );

    browser.set_filter(Filter::Area("Atlantean".into()));
    assert!(matches!(
        browser.next_recipe(&mut page),
        Err(Error::NoMatches(_))
    ));
    assert!(browser.ingredients_text().is_none());
    assert_eq!(page.errors.len(), 1);
}

/// Test that payload helpers feed straight into selection.
#[test]
fn test_payloads_feed_selection() {
    let filtered = r#"{"meals":[
        {"strMeal":"Poutine","strMealThumb":"p.jpg","idMeal":"52804"},
        {"strMeal":"BeaverTails","strMealThumb":"b.jpg","idMeal":"52928"}
    ]}"#;
    let ids = parse_candidates(filtered).unwrap();

    let mut selector = mealpick::RecencySelector::new(SelectorConfig::new(10, 200).unwrap());
    let mut rng = StdRng::seed_from_u64(10);
    let first = selector.pick(&ids, &mut rng).unwrap().clone();
    let second = selector.pick(&ids, &mut rng).unwrap().clone();
    assert_ne!(first, second);

    let areas = parse_filter_options(
        FilterKind::Area,
        r#"{"meals":[{"strArea":"Canadian"},{"strArea":"Japanese"}]}"#,
    )
    .unwrap();
    let filter = Filter::from_choice(FilterKind::Area, &areas[0]);
    assert_eq!(filter.endpoint(), "filter.php?a=Canadian");
}

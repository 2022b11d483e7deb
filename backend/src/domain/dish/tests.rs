//! Unit tests for dish construction and the query primitives.

use std::cmp::Ordering;

use rstest::rstest;
use serde_json::json;

use super::fixtures::{build, draft, dish};
use super::*;

#[rstest]
#[case("", "Kheer", "dish.id")]
#[case("  ", "Kheer", "dish.id")]
#[case("kheer", " ", "dish.name")]
fn dish_rejects_blank_identity(
    #[case] id: &str,
    #[case] name: &str,
    #[case] field: &'static str,
) {
    let err = Dish::new(draft(id, name)).expect_err("blank values must fail");
    assert_eq!(err, DishValidationError::EmptyField { field });
}

#[rstest]
fn dish_serialises_dataset_shape() {
    let value = serde_json::to_value(dish("d1", "Kheer")).expect("serialise dish");
    assert_eq!(
        value,
        json!({
            "id": "d1",
            "name": "Kheer",
            "ingredients": ["rice", "ghee"],
            "diet": "vegetarian",
            "prep_time": 10,
            "cook_time": 20,
            "flavor_profile": "spicy",
            "course": "main course",
            "state": "Punjab",
            "region": "North",
        })
    );
}

#[rstest]
#[case("vegetarian", Diet::Vegetarian)]
#[case("non vegetarian", Diet::NonVegetarian)]
fn diet_parses_wire_values(#[case] raw: &str, #[case] expected: Diet) {
    assert_eq!(raw.parse::<Diet>(), Ok(expected));
    assert_eq!(expected.as_str(), raw);
}

#[rstest]
#[case("Vegetarian")]
#[case("non-vegetarian")]
#[case("")]
fn diet_rejects_unknown_values(#[case] raw: &str) {
    assert!(matches!(
        raw.parse::<Diet>(),
        Err(DishValidationError::UnknownDiet { .. })
    ));
}

#[rstest]
#[case("id", DishSortKey::Id)]
#[case("name", DishSortKey::Name)]
#[case("ingredients", DishSortKey::Ingredients)]
#[case("diet", DishSortKey::Diet)]
#[case("prep_time", DishSortKey::PrepTime)]
#[case("cook_time", DishSortKey::CookTime)]
#[case("flavor_profile", DishSortKey::FlavorProfile)]
#[case("course", DishSortKey::Course)]
#[case("state", DishSortKey::State)]
#[case("region", DishSortKey::Region)]
fn sort_keys_cover_every_attribute(#[case] raw: &str, #[case] expected: DishSortKey) {
    assert_eq!(raw.parse::<DishSortKey>(), Ok(expected));
}

#[rstest]
fn sort_key_rejects_unknown_attribute() {
    assert_eq!(
        "calories".parse::<DishSortKey>(),
        Err(SortParseError::UnknownKey {
            value: "calories".to_owned()
        })
    );
    assert!("DESC".parse::<SortDirection>().is_err());
}

fn with_prep(id: &str, prep_time: u32) -> Dish {
    let mut value = draft(id, id);
    value.prep_time = prep_time;
    build(value)
}

fn ids(dishes: &[Dish]) -> Vec<&str> {
    dishes.iter().map(|dish| dish.id().as_ref()).collect()
}

#[rstest]
#[case(SortDirection::Ascending, vec!["c", "a", "d", "b"])]
#[case(SortDirection::Descending, vec!["b", "a", "d", "c"])]
fn sorting_is_stable_in_both_directions(
    #[case] direction: SortDirection,
    #[case] expected: Vec<&str>,
) {
    let mut dishes = vec![
        with_prep("a", 20),
        with_prep("b", 30),
        with_prep("c", 5),
        with_prep("d", 20),
    ];
    let sort = DishSort::new(DishSortKey::PrepTime, direction);

    sort.sort(&mut dishes);
    assert_eq!(ids(&dishes), expected);

    sort.sort(&mut dishes);
    assert_eq!(ids(&dishes), expected, "sorting twice is idempotent");
}

#[rstest]
fn ingredient_lists_compare_element_wise() {
    let mut short = draft("short", "Short");
    short.ingredients = vec!["rice".to_owned()];
    let mut long = draft("long", "Long");
    long.ingredients = vec!["Rice".to_owned(), "sugar".to_owned()];

    let ordering = DishSortKey::Ingredients.compare(&build(short), &build(long));
    assert_eq!(ordering, Ordering::Less);
}

#[rstest]
fn filter_is_an_intersection() {
    let mut fast_veg = draft("fast-veg", "Poha");
    fast_veg.prep_time = 15;
    let mut slow_veg = draft("slow-veg", "Dum aloo");
    slow_veg.prep_time = 45;
    let mut fast_meat = draft("fast-meat", "Egg bhurji");
    fast_meat.diet = Diet::NonVegetarian;
    fast_meat.prep_time = 5;
    let dishes = [build(fast_veg), build(slow_veg), build(fast_meat)];

    let both = DishFilter {
        diet: Some(Diet::Vegetarian),
        max_prep_time: Some(20),
        ..DishFilter::default()
    };
    let diet_only = DishFilter {
        max_prep_time: None,
        ..both.clone()
    };

    let narrow: Vec<_> = dishes.iter().filter(|d| both.matches(d)).collect();
    let wide: Vec<_> = dishes.iter().filter(|d| diet_only.matches(d)).collect();
    assert_eq!(narrow.len(), 1);
    assert_eq!(narrow.first().map(|d| d.name()), Some("Poha"));
    assert_eq!(wide.len(), 2);
    assert!(dishes.iter().all(|d| DishFilter::default().matches(d)));
}

#[rstest]
fn filter_text_predicates_are_exact() {
    let target = dish("d1", "Kheer");
    let filter = DishFilter {
        state: Some("punjab".to_owned()),
        ..DishFilter::default()
    };
    assert!(!filter.matches(&target));
}

#[rstest]
#[case(&["rice", "ghee"], true)]
#[case(&["RICE"], true)]
#[case(&["ric"], true)]
#[case(&["rice", "saffron"], false)]
#[case(&[], false)]
fn ingredient_query_requires_every_ingredient(#[case] wanted: &[&str], #[case] expected: bool) {
    let mut value = draft("d1", "Ghee rice");
    value.ingredients = vec!["Basmati rice".to_owned(), "Ghee".to_owned()];
    let query = IngredientQuery::new(wanted.iter().copied());

    assert_eq!(query.matches(&build(value)), expected);
}

#[rstest]
#[case("kheer", true)]
#[case("PUNJAB", true)]
#[case("nor", true)]
#[case("spi", true)]
#[case("dessert", false)]
fn matcher_checks_searchable_fields(#[case] query: &str, #[case] expected: bool) {
    let matcher = DishMatcher::new(query, SearchMode::Literal).expect("valid query");
    assert_eq!(matcher.matches(&dish("d1", "Kheer")), expected);
}

#[rstest]
fn literal_mode_treats_metacharacters_as_text() {
    let matcher = DishMatcher::new("k.eer", SearchMode::Literal).expect("valid query");
    assert!(!matcher.matches(&dish("d1", "Kheer")));

    let pattern = DishMatcher::new("k.eer|^zz", SearchMode::Pattern).expect("valid pattern");
    assert!(pattern.matches(&dish("d1", "Kheer")));
}

#[rstest]
#[case(SearchMode::Literal)]
#[case(SearchMode::Pattern)]
fn matcher_treats_whitespace_as_empty(#[case] mode: SearchMode) {
    assert_eq!(
        DishMatcher::new(" \t ", mode).err(),
        Some(SearchQueryError::Empty)
    );
}

#[rstest]
fn matcher_rejects_empty_and_broken_queries() {
    assert_eq!(
        DishMatcher::new("", SearchMode::Literal).err(),
        Some(SearchQueryError::Empty)
    );
    assert!(matches!(
        DishMatcher::new("[", SearchMode::Pattern),
        Err(SearchQueryError::InvalidPattern { .. })
    ));
}

#[rstest]
#[case("literal", SearchMode::Literal)]
#[case(" Pattern ", SearchMode::Pattern)]
fn search_mode_parses_config_values(#[case] raw: &str, #[case] expected: SearchMode) {
    assert_eq!(raw.parse::<SearchMode>(), Ok(expected));
}

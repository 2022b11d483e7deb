//! Dish builders shared by unit tests across the crate.

use super::{Diet, Dish, DishDraft};

/// Draft with plausible defaults; tests override the fields they care about.
pub(crate) fn draft(id: &str, name: &str) -> DishDraft {
    DishDraft {
        id: id.to_owned(),
        name: name.to_owned(),
        ingredients: vec!["rice".to_owned(), "ghee".to_owned()],
        diet: Diet::Vegetarian,
        prep_time: 10,
        cook_time: 20,
        flavor_profile: "spicy".to_owned(),
        course: "main course".to_owned(),
        state: "Punjab".to_owned(),
        region: "North".to_owned(),
    }
}

pub(crate) fn dish(id: &str, name: &str) -> Dish {
    build(draft(id, name))
}

pub(crate) fn build(draft: DishDraft) -> Dish {
    Dish::new(draft).expect("fixture dish is valid")
}

/// `count` dishes named `Dish 001`, `Dish 002`, ... with matching ids.
pub(crate) fn numbered(count: usize) -> Vec<Dish> {
    (1..=count)
        .map(|n| {
            let label = format!("{n:03}");
            dish(&format!("dish-{label}"), &format!("Dish {label}"))
        })
        .collect()
}

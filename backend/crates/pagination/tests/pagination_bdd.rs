//! Behavioural tests for offset pagination.
//!
//! Scenarios mirror the list-endpoint contract: totals come from the sliced
//! collection and out-of-range pages are empty rather than errors.

use pagination::{PageRequest, Paginated};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

#[derive(Default, ScenarioState)]
struct World {
    items: Slot<Vec<usize>>,
    page: Slot<Paginated<usize>>,
}

impl World {
    fn page(&self) -> Paginated<usize> {
        self.page.get().expect("a page should have been requested")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("a collection of {count:usize} items")]
fn a_collection_of_items(world: &World, count: usize) {
    world.items.set((0..count).collect());
}

#[when("page {page:u32} is requested with limit {limit:u32}")]
fn page_is_requested_with_limit(world: &World, page: u32, limit: u32) {
    let items = world.items.get().expect("collection should be set");
    let request = PageRequest::new(page, limit).expect("valid page request");
    world.page.set(Paginated::from_collection(items, request));
}

#[then("the page holds {count:usize} items")]
fn the_page_holds_items(world: &World, count: usize) {
    assert_eq!(world.page().data.len(), count);
}

#[then("the reported total is {total:usize}")]
fn the_reported_total_is(world: &World, total: usize) {
    assert_eq!(world.page().pagination.total, total);
}

#[then("the reported page count is {pages:usize}")]
fn the_reported_page_count_is(world: &World, pages: usize) {
    assert_eq!(world.page().pagination.total_pages, pages);
}

#[then("the first item is {first:usize}")]
fn the_first_item_is(world: &World, first: usize) {
    assert_eq!(world.page().data.first().copied(), Some(first));
}

#[then("the echoed page is {page:u32}")]
fn the_echoed_page_is(world: &World, page: u32) {
    assert_eq!(world.page().pagination.page, page);
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "Middle page of the dish catalogue"
)]
fn middle_page_of_the_dish_catalogue(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/pagination.feature", name = "Final partial page")]
fn final_partial_page(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "Page past the end of the collection"
)]
fn page_past_the_end_of_the_collection(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "Unpaginated limit returns the whole collection"
)]
fn unpaginated_limit_returns_the_whole_collection(world: World) {
    let _ = world;
}

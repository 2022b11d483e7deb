//! Dish catalogue query engine.
//!
//! Every operation reloads the full collection from the repository and works
//! on that snapshot. A failed read is logged and treated as an empty
//! catalogue so callers never see storage faults from a query.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::Paginated;
use tracing::{debug, warn};

use crate::domain::ports::{DishCatalogueQuery, DishRepository};
use crate::domain::{
    Dish, DishFilter, DishId, DishListQuery, DishMatcher, Error, IngredientQuery, SearchMode,
    SearchQueryError,
};

/// Catalogue service implementing the [`DishCatalogueQuery`] driving port.
#[derive(Clone)]
pub struct DishCatalogueService<R> {
    dishes: Arc<R>,
    search_mode: SearchMode,
}

impl<R> DishCatalogueService<R> {
    /// Create a service reading from `dishes` and interpreting search text
    /// according to `search_mode`.
    pub fn new(dishes: Arc<R>, search_mode: SearchMode) -> Self {
        Self {
            dishes,
            search_mode,
        }
    }
}

impl<R> DishCatalogueService<R>
where
    R: DishRepository,
{
    async fn snapshot(&self) -> Vec<Dish> {
        match self.dishes.load_dishes().await {
            Ok(dishes) => {
                debug!(count = dishes.len(), "loaded dish collection");
                dishes
            }
            Err(error) => {
                warn!(%error, "dish collection unavailable; serving an empty catalogue");
                Vec::new()
            }
        }
    }

    fn map_search_error(error: SearchQueryError) -> Error {
        match error {
            SearchQueryError::Empty => Error::invalid_request("Search query is required"),
            SearchQueryError::InvalidPattern { message } => {
                Error::invalid_request("Search query is not a valid pattern")
                    .with_details(serde_json::json!({ "field": "q", "reason": message }))
            }
        }
    }

    async fn select<F>(&self, predicate: F) -> Vec<Dish>
    where
        F: Fn(&Dish) -> bool + Send,
    {
        self.snapshot()
            .await
            .into_iter()
            .filter(|dish| predicate(dish))
            .collect()
    }
}

#[async_trait]
impl<R> DishCatalogueQuery for DishCatalogueService<R>
where
    R: DishRepository,
{
    async fn list(&self, query: &DishListQuery) -> Result<Paginated<Dish>, Error> {
        let mut dishes = self.snapshot().await;
        if let Some(sort) = query.sort() {
            sort.sort(&mut dishes);
        }
        Ok(Paginated::from_collection(dishes, query.page()))
    }

    async fn get(&self, id: &DishId) -> Result<Dish, Error> {
        self.snapshot()
            .await
            .into_iter()
            .find(|dish| dish.id() == id)
            .ok_or_else(|| Error::not_found("Dish not found"))
    }

    async fn search(&self, query: &str) -> Result<Vec<Dish>, Error> {
        let matcher = DishMatcher::new(query, self.search_mode).map_err(Self::map_search_error)?;
        Ok(self.select(|dish| matcher.matches(dish)).await)
    }

    async fn find_by_ingredients(&self, query: &IngredientQuery) -> Result<Vec<Dish>, Error> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.select(|dish| query.matches(dish)).await)
    }

    async fn filter(&self, filter: &DishFilter) -> Result<Vec<Dish>, Error> {
        Ok(self.select(|dish| filter.matches(dish)).await)
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;

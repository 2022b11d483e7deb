//! Driving port for catalogue reads.
//!
//! HTTP handlers depend on this trait rather than the concrete service so
//! their tests can substitute a mock and skip storage entirely.

use async_trait::async_trait;
use pagination::Paginated;

use crate::domain::{Dish, DishFilter, DishId, DishListQuery, Error, IngredientQuery};

/// Domain use-case port for querying dishes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DishCatalogueQuery: Send + Sync {
    /// Sorted, paginated listing.
    async fn list(&self, query: &DishListQuery) -> Result<Paginated<Dish>, Error>;

    /// Exact identifier lookup; `not_found` when absent.
    async fn get(&self, id: &DishId) -> Result<Dish, Error>;

    /// Free-text search; `invalid_request` for an empty or unusable query.
    async fn search(&self, query: &str) -> Result<Vec<Dish>, Error>;

    /// Dishes containing every requested ingredient.
    async fn find_by_ingredients(&self, query: &IngredientQuery) -> Result<Vec<Dish>, Error>;

    /// Dishes satisfying every predicate in `filter`.
    async fn filter(&self, filter: &DishFilter) -> Result<Vec<Dish>, Error>;
}

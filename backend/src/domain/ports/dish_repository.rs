//! Driven port for reading the dish collection.
//!
//! The query engine re-reads the whole collection on every call, so
//! adapters return an owned, ordered snapshot and keep no cache.

use async_trait::async_trait;

use crate::domain::Dish;

use super::define_port_error;

define_port_error! {
    /// Errors raised when the dish collection cannot be produced.
    pub enum DishRepositoryError {
        /// Backing storage could not be read.
        Read { message: String } => "dish collection read failed: {message}",
        /// Stored content could not be decoded.
        Decode { message: String } => "dish collection is malformed: {message}",
    }
}

/// Port for loading the dish catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DishRepository: Send + Sync {
    /// Return every dish in stored order.
    async fn load_dishes(&self) -> Result<Vec<Dish>, DishRepositoryError>;
}

/// In-memory repository serving a fixed collection.
#[derive(Debug, Default, Clone)]
pub struct FixtureDishRepository {
    dishes: Vec<Dish>,
}

impl FixtureDishRepository {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }
}

#[async_trait]
impl DishRepository for FixtureDishRepository {
    async fn load_dishes(&self) -> Result<Vec<Dish>, DishRepositoryError> {
        Ok(self.dishes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dish::fixtures::numbered;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_repository_returns_its_collection() {
        let repo = FixtureDishRepository::new(numbered(3));
        let dishes = repo.load_dishes().await.expect("load dishes");
        assert_eq!(dishes.len(), 3);
        assert_eq!(dishes.first().map(|d| d.name()), Some("Dish 001"));
    }

    #[rstest]
    fn errors_render_their_cause() {
        let err = DishRepositoryError::decode("expected `[`");
        assert_eq!(err.to_string(), "dish collection is malformed: expected `[`");
    }
}

//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`DishRepository`, `UserRepository`, `CredentialHasher`,
//! `TokenService`) are implemented by outbound adapters. Driving ports
//! (`DishCatalogueQuery`, `UserAccounts`) are implemented by domain services
//! and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_hasher;
mod dish_catalogue_query;
mod dish_repository;
mod token_service;
mod user_accounts;
mod user_repository;

#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHashError, CredentialHasher, FixtureCredentialHasher};
#[cfg(test)]
pub use dish_catalogue_query::MockDishCatalogueQuery;
pub use dish_catalogue_query::DishCatalogueQuery;
#[cfg(test)]
pub use dish_repository::MockDishRepository;
pub use dish_repository::{DishRepository, DishRepositoryError, FixtureDishRepository};
#[cfg(test)]
pub use token_service::MockTokenService;
pub use token_service::{TokenError, TokenService};
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::UserAccounts;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserPersistenceError, UserRepository};

//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DishCatalogueQuery, TokenService, UserAccounts};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub dishes: Arc<dyn DishCatalogueQuery>,
    pub accounts: Arc<dyn UserAccounts>,
    pub tokens: Arc<dyn TokenService>,
}

impl HttpState {
    /// Construct state from the driving ports and the token verifier used by
    /// the bearer extractor.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use dishes_backend::domain::ports::{
    ///     FixtureCredentialHasher, FixtureDishRepository, FixtureUserRepository,
    /// };
    /// use dishes_backend::domain::{DishCatalogueService, SearchMode, UserAccountsService};
    /// use dishes_backend::inbound::http::state::HttpState;
    /// use dishes_backend::outbound::security::{DEFAULT_TOKEN_TTL, JwtTokenService};
    /// use mockable::DefaultClock;
    ///
    /// let clock = Arc::new(DefaultClock);
    /// let tokens = Arc::new(JwtTokenService::new(
    ///     b"0123456789abcdef0123456789abcdef",
    ///     DEFAULT_TOKEN_TTL,
    ///     clock.clone(),
    /// ));
    /// let state = HttpState::new(
    ///     Arc::new(DishCatalogueService::new(
    ///         Arc::new(FixtureDishRepository::default()),
    ///         SearchMode::Literal,
    ///     )),
    ///     Arc::new(UserAccountsService::new(
    ///         Arc::new(FixtureUserRepository::default()),
    ///         Arc::new(FixtureCredentialHasher),
    ///         tokens.clone(),
    ///         clock,
    ///     )),
    ///     tokens,
    /// );
    /// let _dishes = state.dishes.clone();
    /// ```
    pub fn new(
        dishes: Arc<dyn DishCatalogueQuery>,
        accounts: Arc<dyn UserAccounts>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            dishes,
            accounts,
            tokens,
        }
    }
}

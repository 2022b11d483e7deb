//! Builders wiring the JSON store and security adapters into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use dishes_backend::domain::ports::TokenService;
use dishes_backend::domain::{DishCatalogueService, UserAccountsService};
use dishes_backend::inbound::http::state::HttpState;
use dishes_backend::outbound::json_store::JsonFileStore;
use dishes_backend::outbound::security::{Argon2CredentialHasher, JwtTokenService};

use super::ServerConfig;

/// Open the data directory and assemble the services behind the HTTP
/// handlers.
///
/// # Errors
/// Returns [`std::io::Error`] when the data directory cannot be opened or
/// initialised.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let store = JsonFileStore::open(config.data_dir().to_owned())
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    info!(data_dir = %store.root(), "opened JSON store");
    let store = Arc::new(store);

    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let tokens = Arc::new(JwtTokenService::new(
        config.token_secret.as_bytes(),
        config.token_ttl,
        Arc::clone(&clock),
    ));
    let verifier: Arc<dyn TokenService> = tokens.clone();

    let dishes = DishCatalogueService::new(Arc::clone(&store), config.search_mode);
    let accounts = UserAccountsService::new(
        store,
        Arc::new(Argon2CredentialHasher::default()),
        tokens,
        clock,
    );

    Ok(web::Data::new(HttpState::new(
        Arc::new(dishes),
        Arc::new(accounts),
        verifier,
    )))
}

//! Backend entry-point: loads settings, opens the JSON store, and serves the
//! REST API with OpenAPI docs in debug builds.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use dishes_backend::inbound::http::health::HealthState;
use dishes_backend::settings::fingerprint::secret_fingerprint;
use dishes_backend::settings::{AppSettings, BuildMode, load_token_secret};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = build_config(&settings)?;

    info!(
        addr = %config.bind_addr(),
        data_dir = %config.data_dir(),
        "starting dish catalogue server"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}

fn build_config(settings: &AppSettings) -> std::io::Result<ServerConfig> {
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let token_ttl = settings.token_ttl().map_err(std::io::Error::other)?;
    let search_mode = settings.search_mode().map_err(std::io::Error::other)?;

    let secret = load_token_secret(
        &settings.token_secret_file(),
        BuildMode::from_debug_assertions(),
        settings.allow_ephemeral_secret,
    )
    .map_err(std::io::Error::other)?;
    info!(
        fingerprint = %secret_fingerprint(secret.as_bytes()),
        ephemeral = secret.is_ephemeral(),
        "token secret loaded"
    );

    Ok(
        ServerConfig::new(bind_addr, settings.data_dir(), secret, token_ttl)
            .with_search_mode(search_mode),
    )
}

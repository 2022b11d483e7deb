//! Server settings loaded via OrthoConfig.
//!
//! Values come from `DISHES_*` environment variables, an optional config
//! file, and command-line flags, in OrthoConfig's usual precedence.

pub mod fingerprint;
pub mod token_secret;

use std::net::{AddrParseError, IpAddr, SocketAddr};

use camino::Utf8PathBuf;
use chrono::TimeDelta;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{SearchMode, SearchModeParseError};

pub use token_secret::{BuildMode, TokenSecret, TokenSecretError, load_token_secret};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_TOKEN_SECRET_FILE: &str = "/var/run/secrets/token_secret";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address '{host}:{port}': {source}")]
    BindAddress {
        host: String,
        port: u16,
        #[source]
        source: AddrParseError,
    },
    #[error("DISHES_TOKEN_TTL_HOURS must be a positive number of hours, got {hours}")]
    TokenTtl { hours: i64 },
    #[error(transparent)]
    SearchMode(#[from] SearchModeParseError),
}

/// Runtime configuration for the dish catalogue server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DISHES")]
pub struct AppSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// TCP port; defaults to 5000.
    pub port: Option<u16>,
    /// Directory holding `dishes.json` and `users.json`.
    pub data_dir: Option<Utf8PathBuf>,
    /// File containing the token signing secret.
    pub token_secret_file: Option<Utf8PathBuf>,
    /// Permit a random per-process secret when the file is unreadable.
    #[ortho_config(default = false)]
    pub allow_ephemeral_secret: bool,
    /// Token lifetime in hours; defaults to 24.
    pub token_ttl_hours: Option<i64>,
    /// `literal` (default) or `pattern`.
    pub search_mode: Option<String>,
}

impl AppSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address assembled from [`Self::host`] and [`Self::port`].
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let port = self.port();
        host.parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, port))
            .map_err(|source| SettingsError::BindAddress {
                host: host.to_owned(),
                port,
                source,
            })
    }

    pub fn data_dir(&self) -> Utf8PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR))
    }

    pub fn token_secret_file(&self) -> Utf8PathBuf {
        self.token_secret_file
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_TOKEN_SECRET_FILE))
    }

    pub fn token_ttl(&self) -> Result<TimeDelta, SettingsError> {
        let hours = self.token_ttl_hours.unwrap_or(DEFAULT_TOKEN_TTL_HOURS);
        if hours <= 0 {
            return Err(SettingsError::TokenTtl { hours });
        }
        TimeDelta::try_hours(hours).ok_or(SettingsError::TokenTtl { hours })
    }

    pub fn search_mode(&self) -> Result<SearchMode, SettingsError> {
        match self.search_mode.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Ok(raw.trim().parse()?),
            _ => Ok(SearchMode::default()),
        }
    }
}

//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::TimeDelta;

use dishes_backend::domain::SearchMode;
use dishes_backend::settings::TokenSecret;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) token_secret: TokenSecret,
    pub(crate) token_ttl: TimeDelta,
    pub(crate) search_mode: SearchMode,
}

impl ServerConfig {
    /// Construct a server configuration from the loaded settings.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        data_dir: Utf8PathBuf,
        token_secret: TokenSecret,
        token_ttl: TimeDelta,
    ) -> Self {
        Self {
            bind_addr,
            data_dir,
            token_secret,
            token_ttl,
            search_mode: SearchMode::default(),
        }
    }

    /// Choose how `GET /api/dishes/search/name` interprets its query.
    #[must_use]
    pub fn with_search_mode(mut self, search_mode: SearchMode) -> Self {
        self.search_mode = search_mode;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Directory holding the JSON collections.
    #[must_use]
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }
}

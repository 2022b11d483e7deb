//! Token signing secret loading and validation.
//!
//! Release builds refuse to start without a readable secret of at least
//! [`TOKEN_SECRET_MIN_LEN`] bytes. Debug builds, or an explicit opt-in, fall
//! back to a random per-process secret so local runs need no setup; tokens
//! issued with it die with the process.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use rand::RngCore;
use rand::rngs::OsRng;
use tracing::warn;
use zeroize::Zeroizing;

/// Minimum secret length accepted in release builds.
pub const TOKEN_SECRET_MIN_LEN: usize = 32;
const EPHEMERAL_SECRET_LEN: usize = 64;

/// Build mode for secret validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate a missing or short secret with a warning.
    Debug,
    /// Release builds require a real secret.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dishes_backend::settings::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// if cfg!(debug_assertions) {
    ///     assert_eq!(mode, BuildMode::Debug);
    /// } else {
    ///     assert_eq!(mode, BuildMode::Release);
    /// }
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Secret bytes, wiped on drop.
pub struct TokenSecret {
    bytes: Zeroizing<Vec<u8>>,
    ephemeral: bool,
}

impl TokenSecret {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the secret was generated for this process only.
    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }

    fn generate() -> Self {
        let mut bytes = Zeroizing::new(vec![0_u8; EPHEMERAL_SECRET_LEN]);
        OsRng.fill_bytes(&mut bytes);
        Self {
            bytes,
            ephemeral: true,
        }
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSecret")
            .field("len", &self.bytes.len())
            .field("ephemeral", &self.ephemeral)
            .finish()
    }
}

/// Errors raised while loading the token secret.
#[derive(thiserror::Error, Debug)]
pub enum TokenSecretError {
    /// Reading the secret file failed.
    #[error("failed to read token secret at {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The secret file exists but is too short for release builds.
    #[error("token secret at {path} too short: need >= {min_len} bytes, got {length}")]
    TooShort {
        path: Utf8PathBuf,
        length: usize,
        min_len: usize,
    },
}

/// Load the signing secret from `path`.
///
/// Trailing newlines are stripped so secrets written with `echo` work.
///
/// # Examples
///
/// ```rust
/// use camino::Utf8PathBuf;
/// use dishes_backend::settings::{BuildMode, load_token_secret};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// let path = Utf8PathBuf::try_from(dir.path().join("secret"))?;
/// std::fs::write(&path, vec![b'k'; 48])?;
///
/// let secret = load_token_secret(&path, BuildMode::Release, false)?;
/// assert_eq!(secret.as_bytes().len(), 48);
/// assert!(!secret.is_ephemeral());
/// # Ok(())
/// # }
/// ```
pub fn load_token_secret(
    path: &Utf8Path,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<TokenSecret, TokenSecretError> {
    match std::fs::read(path) {
        Ok(raw) => {
            let mut bytes = Zeroizing::new(raw);
            while bytes.last().is_some_and(|byte| matches!(byte, b'\n' | b'\r')) {
                bytes.pop();
            }
            let length = bytes.len();
            if length < TOKEN_SECRET_MIN_LEN {
                if mode.is_debug() {
                    warn!(%path, length, "token secret shorter than recommended (dev only)");
                } else {
                    return Err(TokenSecretError::TooShort {
                        path: path.to_owned(),
                        length,
                        min_len: TOKEN_SECRET_MIN_LEN,
                    });
                }
            }
            Ok(TokenSecret {
                bytes,
                ephemeral: false,
            })
        }
        Err(error) => {
            if mode.is_debug() || allow_ephemeral {
                warn!(
                    %path,
                    error = %error,
                    "using temporary token secret; tokens will not survive a restart"
                );
                Ok(TokenSecret::generate())
            } else {
                Err(TokenSecretError::Read {
                    path: path.to_owned(),
                    source: error,
                })
            }
        }
    }
}

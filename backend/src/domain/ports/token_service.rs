//! Driven port for issuing and verifying bearer tokens.

use crate::domain::{TokenClaims, User};

use super::define_port_error;

define_port_error! {
    /// Token failures. Callers surface all of them as one generic message.
    pub enum TokenError {
        /// The token could not be decoded.
        Malformed { message: String } => "token is malformed: {message}",
        /// The signature does not match the configured secret.
        InvalidSignature => "token signature is invalid",
        /// The expiry has passed.
        Expired => "token has expired",
        /// A token could not be produced.
        Issue { message: String } => "token could not be issued: {message}",
    }
}

/// Stateless signed tokens with a fixed lifetime. No revocation list.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Sign a token carrying the user's id, email, and role.
    fn issue(&self, user: &User) -> Result<String, TokenError>;

    /// Check signature and expiry, returning the embedded claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

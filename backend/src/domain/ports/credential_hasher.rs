//! Driven port for one-way password hashing.

use async_trait::async_trait;

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Failures raised while hashing or verifying a password.
    pub enum CredentialHashError {
        /// Hash computation failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// The stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

/// Salted, deliberately slow password hashing.
///
/// Implementations must use a fresh salt for every call to `hash`, and
/// `verify` must not leak the mismatch position through timing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hash `password` with a fresh salt.
    async fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHashError>;

    /// Whether `password` matches `hash`. A mismatch is `Ok(false)`.
    async fn verify(&self, password: &str, hash: &PasswordHash)
    -> Result<bool, CredentialHashError>;
}

/// Reversible stand-in for tests that do not exercise hashing cost.
///
/// Never wire this into a running server.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCredentialHasher;

const FIXTURE_PREFIX: &str = "fixture$";

#[async_trait]
impl CredentialHasher for FixtureCredentialHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHashError> {
        PasswordHash::new(format!("{FIXTURE_PREFIX}{password}"))
            .map_err(|err| CredentialHashError::hash(err.to_string()))
    }

    async fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> Result<bool, CredentialHashError> {
        let stored = hash
            .as_str()
            .strip_prefix(FIXTURE_PREFIX)
            .ok_or_else(|| CredentialHashError::malformed_hash("missing fixture prefix"))?;
        Ok(stored == password)
    }
}

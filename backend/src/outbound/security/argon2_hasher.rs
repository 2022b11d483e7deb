//! Argon2id implementation of the credential hasher port.

use argon2::password_hash::{
    self, PasswordHash as PhcString, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::domain::PasswordHash;
use crate::domain::ports::{CredentialHashError, CredentialHasher};

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$...`).
///
/// Hashing is CPU-bound, so both operations run on the blocking pool. The
/// default cost parameters target interactive login latency.
#[derive(Debug, Clone)]
pub struct Argon2CredentialHasher {
    params: Params,
}

impl Default for Argon2CredentialHasher {
    fn default() -> Self {
        Self {
            params: Params::DEFAULT,
        }
    }
}

impl Argon2CredentialHasher {
    /// Use explicit cost parameters.
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

async fn on_blocking_pool<T, F>(task: F) -> Result<T, CredentialHashError>
where
    F: FnOnce() -> Result<T, CredentialHashError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| CredentialHashError::hash(format!("hashing task failed: {err}")))?
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHashError> {
        let argon2 = self.argon2();
        let password = Zeroizing::new(password.to_owned());
        let encoded = on_blocking_pool(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| CredentialHashError::hash(err.to_string()))
        })
        .await?;
        PasswordHash::new(encoded).map_err(|err| CredentialHashError::hash(err.to_string()))
    }

    async fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> Result<bool, CredentialHashError> {
        let argon2 = self.argon2();
        let password = Zeroizing::new(password.to_owned());
        let encoded = hash.as_str().to_owned();
        on_blocking_pool(move || {
            let parsed = PhcString::new(&encoded)
                .map_err(|err| CredentialHashError::malformed_hash(err.to_string()))?;
            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(err) => Err(CredentialHashError::malformed_hash(err.to_string())),
            }
        })
        .await
    }
}

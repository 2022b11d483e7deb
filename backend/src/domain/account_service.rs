//! User account service: registration, login, and profile lookups.
//!
//! Login failures collapse into one `unauthorized` error whatever the cause.
//! The distinction between an unknown email and a wrong password only appears
//! in debug logs. An unknown email still pays for one password hash so both
//! failures take comparable time.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CredentialHashError, CredentialHasher, TokenError, TokenService, UserAccounts,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    AuthSession, EmailAddress, Error, LoginCredentials, Registration, User, UserId, UserProfile,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const EMAIL_TAKEN: &str = "User with this email already exists";

/// Account service implementing the [`UserAccounts`] driving port.
#[derive(Clone)]
pub struct UserAccountsService<U, H, T> {
    users: Arc<U>,
    hasher: Arc<H>,
    tokens: Arc<T>,
    clock: Arc<dyn Clock>,
}

impl<U, H, T> UserAccountsService<U, H, T> {
    pub fn new(users: Arc<U>, hasher: Arc<H>, tokens: Arc<T>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            hasher,
            tokens,
            clock,
        }
    }
}

impl<U, H, T> UserAccountsService<U, H, T>
where
    U: UserRepository,
    H: CredentialHasher,
    T: TokenService,
{
    /// Stored users, or an empty set when the store cannot be read.
    async fn known_users(&self) -> Vec<User> {
        match self.users.load_users().await {
            Ok(users) => users,
            Err(error) => {
                warn!(%error, "user store unavailable; treating it as empty");
                Vec::new()
            }
        }
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Option<User> {
        self.known_users()
            .await
            .into_iter()
            .find(|user| user.email() == email)
    }

    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::EmailTaken { .. } => Error::conflict(EMAIL_TAKEN),
            other => Error::internal(format!("user store error: {other}")),
        }
    }

    /// Spend the cost of a credential check on a password with no account.
    async fn burn_hash(&self, password: &str) {
        if let Err(error) = self.hasher.hash(password).await {
            debug!(%error, "decoy password hash failed");
        }
    }

    fn map_hash_error(error: CredentialHashError) -> Error {
        Error::internal(format!("credential hashing failed: {error}"))
    }

    fn map_token_error(error: TokenError) -> Error {
        Error::internal(format!("token issuance failed: {error}"))
    }

    fn session_for(&self, user: &User) -> Result<AuthSession, Error> {
        let token = self.tokens.issue(user).map_err(Self::map_token_error)?;
        Ok(AuthSession {
            user: UserProfile::from(user),
            token,
        })
    }
}

#[async_trait]
impl<U, H, T> UserAccounts for UserAccountsService<U, H, T>
where
    U: UserRepository,
    H: CredentialHasher,
    T: TokenService,
{
    async fn register(&self, registration: &Registration) -> Result<AuthSession, Error> {
        if self.find_by_email(registration.email()).await.is_some() {
            return Err(Error::conflict(EMAIL_TAKEN));
        }

        let password_hash = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(Self::map_hash_error)?;
        let user = User::register(
            registration.username().clone(),
            registration.email().clone(),
            password_hash,
            self.clock.utc(),
        );
        self.users
            .append_user(&user)
            .await
            .map_err(Self::map_persistence_error)?;

        info!(user_id = %user.id(), "registered user");
        self.session_for(&user)
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, Error> {
        let Some(user) = self.find_by_email(credentials.email()).await else {
            self.burn_hash(credentials.password()).await;
            debug!("login rejected: no account for email");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let matches = self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await
            .map_err(Self::map_hash_error)?;
        if !matches {
            debug!(user_id = %user.id(), "login rejected: password mismatch");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }

        debug!(user_id = %user.id(), "login accepted");
        self.session_for(&user)
    }

    async fn profile(&self, user_id: &UserId) -> Result<UserProfile, Error> {
        self.known_users()
            .await
            .iter()
            .find(|user| user.id() == user_id)
            .map(UserProfile::from)
            .ok_or_else(|| Error::not_found("User not found"))
    }

    async fn list_users(&self) -> Result<Vec<UserProfile>, Error> {
        Ok(self
            .known_users()
            .await
            .iter()
            .map(UserProfile::from)
            .collect())
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;

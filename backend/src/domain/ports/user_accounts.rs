//! Driving port for account use-cases: sign-up, login, and lookups.

use async_trait::async_trait;

use crate::domain::{AuthSession, Error, LoginCredentials, Registration, UserId, UserProfile};

/// Domain use-case port for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Create an account and sign the caller in. `conflict` for a taken email.
    async fn register(&self, registration: &Registration) -> Result<AuthSession, Error>;

    /// Check credentials. Every failure is the same `unauthorized` error.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, Error>;

    /// Profile of an authenticated user; `not_found` if the account is gone.
    async fn profile(&self, user_id: &UserId) -> Result<UserProfile, Error>;

    /// Every account, without credentials.
    async fn list_users(&self) -> Result<Vec<UserProfile>, Error>;
}

//! Port abstraction for user persistence adapters and their errors.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Backing storage could not be read.
        Read { message: String } => "user store read failed: {message}",
        /// Stored content could not be decoded.
        Decode { message: String } => "user store is malformed: {message}",
        /// The updated collection could not be written.
        Write { message: String } => "user store write failed: {message}",
        /// A stored record, valid or not, already uses this email.
        EmailTaken { email: String } => "a stored user already uses {email}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user.
    async fn load_users(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Persist a newly registered user.
    ///
    /// Fails with [`UserPersistenceError::EmailTaken`] when any stored record
    /// carries the same email, including records `load_users` skips.
    async fn append_user(&self, user: &User) -> Result<(), UserPersistenceError>;
}

/// In-memory repository for tests and local wiring.
#[derive(Debug, Default)]
pub struct FixtureUserRepository {
    users: Mutex<Vec<User>>,
}

impl FixtureUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn load_users(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.users
            .lock()
            .map(|users| users.clone())
            .map_err(|_| UserPersistenceError::read("fixture store lock poisoned"))
    }

    async fn append_user(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| UserPersistenceError::write("fixture store lock poisoned"))?;
        if users.iter().any(|stored| stored.email() == user.email()) {
            return Err(UserPersistenceError::email_taken(user.email().as_ref()));
        }
        users.push(user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, PasswordHash, User, Username};
    use chrono::Utc;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_repository_appends_in_order() {
        let repo = FixtureUserRepository::default();
        for name in ["alice", "bob"] {
            let user = User::register(
                Username::new(name).expect("username"),
                EmailAddress::new(format!("{name}@x.com")).expect("email"),
                PasswordHash::new("hash").expect("hash"),
                Utc::now(),
            );
            repo.append_user(&user).await.expect("append");
        }

        let users = repo.load_users().await.expect("load");
        let names: Vec<_> = users.iter().map(|u| u.username().to_string()).collect();
        assert_eq!(names, ["alice", "bob"]);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_repository_refuses_a_second_email() {
        let email = EmailAddress::new("alice@x.com").expect("email");
        let register = |name: &str| {
            User::register(
                Username::new(name).expect("username"),
                email.clone(),
                PasswordHash::new("hash").expect("hash"),
                Utc::now(),
            )
        };
        let repo = FixtureUserRepository::new(vec![register("alice")]);

        let err = repo
            .append_user(&register("alicia"))
            .await
            .expect_err("duplicate email");

        assert_eq!(err, UserPersistenceError::email_taken("alice@x.com"));
        assert_eq!(repo.load_users().await.expect("load").len(), 1);
    }
}

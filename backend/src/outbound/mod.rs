//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **json_store**: `dishes.json` and `users.json` in a data directory
//! - **security**: Argon2id password hashing and signed bearer tokens
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod json_store;
pub mod security;

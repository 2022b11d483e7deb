//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;
use chrono::{TimeDelta, TimeZone, Utc};

use crate::domain::ports::{
    DishCatalogueQuery, MockTokenService, TokenError, TokenService, UserAccounts,
};
use crate::domain::{Role, TokenClaims, UserId};
use crate::inbound::http::state::HttpState;

/// Stable identifier shared by handler tests.
pub const TEST_USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

/// Bearer token accepted as a regular user.
pub const USER_TOKEN: &str = "user-token";
/// Bearer token accepted as an administrator.
pub const ADMIN_TOKEN: &str = "admin-token";
/// Bearer token rejected as expired.
pub const EXPIRED_TOKEN: &str = "stale-token";

/// Claims for [`TEST_USER_ID`] with the given email and role.
pub fn claims_for(email: &str, role: Role) -> TokenClaims {
    let issued_at = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    TokenClaims {
        user_id: UserId::new(TEST_USER_ID).expect("fixture id"),
        email: email.to_owned(),
        role,
        issued_at,
        expires_at: issued_at + TimeDelta::hours(24),
    }
}

/// Wrap the ports in `web::Data` ready for `App::app_data`.
pub fn http_state(
    dishes: Arc<dyn DishCatalogueQuery>,
    accounts: Arc<dyn UserAccounts>,
    tokens: Arc<dyn TokenService>,
) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(dishes, accounts, tokens))
}

/// Token verifier that knows [`USER_TOKEN`], [`ADMIN_TOKEN`], and
/// [`EXPIRED_TOKEN`]; anything else fails the signature check.
pub fn bearer_tokens() -> MockTokenService {
    let mut tokens = MockTokenService::new();
    tokens.expect_verify().returning(|token| match token {
        USER_TOKEN => Ok(claims_for("asha@example.com", Role::User)),
        ADMIN_TOKEN => Ok(claims_for("root@example.com", Role::Admin)),
        EXPIRED_TOKEN => Err(TokenError::expired()),
        _ => Err(TokenError::invalid_signature()),
    });
    tokens
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (
        actix_web::http::header::AUTHORIZATION,
        format!("Bearer {token}"),
    )
}

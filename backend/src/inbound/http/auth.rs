//! Bearer-token authentication for HTTP handlers.
//!
//! Keep the HTTP modules focused on request/response mapping by concentrating
//! token extraction and role checks here. Every failure surfaces as a generic
//! `401`; the precise cause is only logged.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};
use tracing::debug;

use crate::domain::{Error, Role, TokenClaims};
use crate::inbound::http::state::HttpState;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHENTICATION_REQUIRED: &str = "Authentication required";
const INVALID_TOKEN: &str = "Invalid or expired token";

/// Claims of the caller, verified from the `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(TokenClaims);

impl AuthenticatedUser {
    /// Verified token claims.
    pub fn claims(&self) -> &TokenClaims {
        &self.0
    }

    /// Require the `admin` role or return `403 Forbidden`.
    pub fn require_admin(&self) -> Result<(), Error> {
        if self.0.role == Role::Admin {
            Ok(())
        } else {
            debug!(user_id = %self.0.user_id, "admin role required");
            Err(Error::forbidden("Insufficient permissions"))
        }
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix(BEARER_PREFIX)?.trim();
    (!token.is_empty()).then_some(token)
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state is not registered"))?;
    let token = bearer_token(req).ok_or_else(|| Error::unauthorized(AUTHENTICATION_REQUIRED))?;
    state
        .tokens
        .verify(token)
        .map(AuthenticatedUser)
        .map_err(|error| {
            debug!(%error, "bearer token rejected");
            Error::unauthorized(INVALID_TOKEN)
        })
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

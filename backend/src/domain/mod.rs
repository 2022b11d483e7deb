//! Domain primitives, services, and ports.
//!
//! Purpose: Define strongly typed catalogue and account entities, the
//! services that implement the driving ports, and the driven ports adapters
//! must satisfy. Nothing here knows about HTTP or the filesystem.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Dish and the query primitives (sort, filter, ingredient and text search).
//! - User / UserProfile and the credential types in `auth`.
//! - DishCatalogueService and UserAccountsService.

pub mod account_service;
pub mod auth;
pub mod catalogue_service;
pub mod dish;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::account_service::UserAccountsService;
pub use self::auth::{
    AuthSession, LoginCredentials, LoginValidationError, Registration,
    RegistrationValidationError, TokenClaims,
};
pub use self::catalogue_service::DishCatalogueService;
pub use self::dish::{
    Diet, Dish, DishDraft, DishFilter, DishId, DishListQuery, DishMatcher, DishSort, DishSortKey,
    DishValidationError, IngredientQuery, SearchMode, SearchModeParseError, SearchQueryError,
    SortDirection, SortParseError, locale_cmp,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EmailAddress, PasswordHash, Role, User, UserId, UserParts, UserProfile, UserValidationError,
    Username,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use dishes_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("Insufficient permissions"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;

//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint in the inbound layer (auth, users,
//!   dishes, health)
//! - **Schemas**: domain types plus the wrappers in
//!   [`crate::inbound::http::schemas`] for the pagination envelope
//! - **Security**: bearer token authentication scheme
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Diet, Dish, Error, ErrorCode, Role, UserProfile};
use crate::inbound::http::dishes::{DishResults, IngredientsRequest};
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::schemas::{DishPageSchema, PaginationMetaSchema};
use crate::inbound::http::users::{AuthResponse, LoginRequest, RegisterRequest};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "Token returned by POST /api/auth/register or POST /api/auth/login.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Indian dishes catalogue API",
        description = "Browse, search, and filter a catalogue of Indian dishes; register and sign in with bearer tokens.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::me,
        crate::inbound::http::users::list_users,
        crate::inbound::http::dishes::list_dishes,
        crate::inbound::http::dishes::search_dishes,
        crate::inbound::http::dishes::find_by_ingredients,
        crate::inbound::http::dishes::filter_dishes,
        crate::inbound::http::dishes::get_dish,
        crate::inbound::http::health::status,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Dish,
        Diet,
        DishPageSchema,
        PaginationMetaSchema,
        DishResults,
        IngredientsRequest,
        UserProfile,
        Role,
        RegisterRequest,
        LoginRequest,
        AuthResponse,
        HealthStatus,
        Error,
        ErrorCode
    )),
    tags(
        (name = "auth", description = "Registration, login, and the current user"),
        (name = "users", description = "Account administration"),
        (name = "dishes", description = "Dish catalogue queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

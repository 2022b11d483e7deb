//! OpenAPI schema definitions for types owned by other crates.
//!
//! The pagination envelope lives in the `pagination` crate, which stays free
//! of utoipa. This module provides the schema definitions required for OpenAPI
//! documentation using utoipa's external schema registration.

use utoipa::ToSchema;

use crate::domain::Dish;

/// OpenAPI schema for [`pagination::PaginationMeta`].
#[derive(ToSchema)]
#[schema(as = pagination::PaginationMeta, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PaginationMetaSchema {
    /// Size of the whole collection before slicing.
    #[schema(example = 255)]
    total: usize,
    /// Echo of the requested page number.
    #[schema(example = 3)]
    page: u32,
    /// Echo of the requested page size.
    #[schema(example = 10)]
    limit: u32,
    /// Number of pages at this page size.
    #[schema(example = 26)]
    total_pages: usize,
}

/// OpenAPI schema for a page of dishes, `pagination::Paginated<Dish>`.
#[derive(ToSchema)]
#[schema(as = DishPage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DishPageSchema {
    /// Dishes on the requested page.
    data: Vec<Dish>,
    /// Totals and the echoed request.
    pagination: PaginationMetaSchema,
}

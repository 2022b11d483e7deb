//! Dish catalogue read endpoints.
//!
//! ```text
//! GET  /api/dishes?page=1&limit=10&sortBy=name&sortOrder=asc
//! GET  /api/dishes/search/name?q=paneer
//! POST /api/dishes/by-ingredients {"ingredients":["rice","ghee"]}
//! GET  /api/dishes/filter?diet=vegetarian&maxPrepTime=20
//! GET  /api/dishes/{id}
//! ```
//!
//! Every route requires a bearer token. Register the `search` and `filter`
//! routes before `{id}` so the literal segments win.

use actix_web::{HttpResponse, get, post, web};
use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Diet, Dish, DishFilter, DishId, DishListQuery, DishSort, DishSortKey, Error, IngredientQuery,
    SortDirection, SortParseError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, invalid_value_error, missing_field_error, non_blank, parse_minutes, parse_positive,
};

const PAGE: FieldName = FieldName::new("page");
const LIMIT: FieldName = FieldName::new("limit");
const SORT_BY: FieldName = FieldName::new("sortBy");
const SORT_ORDER: FieldName = FieldName::new("sortOrder");
const DIET: FieldName = FieldName::new("diet");
const MAX_PREP_TIME: FieldName = FieldName::new("maxPrepTime");
const MAX_COOK_TIME: FieldName = FieldName::new("maxCookTime");
const INGREDIENTS: FieldName = FieldName::new("ingredients");

const SORT_KEYS: &str =
    "id, name, ingredients, diet, prep_time, cook_time, flavor_profile, course, state, region";

/// Query string for `GET /api/dishes`.
///
/// Values are kept as text so malformed numbers produce a field-specific
/// error.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListDishesQuery {
    /// 1-based page number; defaults to 1.
    #[param(value_type = Option<u32>, example = 1)]
    pub page: Option<String>,
    /// Page size; defaults to 10. Values of 1000 or more return everything.
    #[param(value_type = Option<u32>, example = 10)]
    pub limit: Option<String>,
    /// Dish attribute to sort by.
    #[param(example = "name")]
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`.
    #[param(example = "asc")]
    pub sort_order: Option<String>,
}

impl TryFrom<ListDishesQuery> for DishListQuery {
    type Error = Error;

    fn try_from(value: ListDishesQuery) -> Result<Self, Self::Error> {
        let page = parse_positive(value.page, PAGE, DEFAULT_PAGE)?;
        let limit = parse_positive(value.limit, LIMIT, DEFAULT_LIMIT)?;
        let page = PageRequest::new(page, limit)
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let direction = non_blank(value.sort_order)
            .map(|raw| raw.parse::<SortDirection>().map_err(map_sort_error))
            .transpose()?
            .unwrap_or_default();
        let sort = non_blank(value.sort_by)
            .map(|raw| raw.parse::<DishSortKey>().map_err(map_sort_error))
            .transpose()?
            .map(|key| DishSort::new(key, direction));

        Ok(DishListQuery::new(page, sort))
    }
}

fn map_sort_error(err: SortParseError) -> Error {
    match err {
        SortParseError::UnknownKey { value } => invalid_value_error(SORT_BY, &value, SORT_KEYS),
        SortParseError::UnknownDirection { value } => {
            invalid_value_error(SORT_ORDER, &value, "asc, desc")
        }
    }
}

/// Query string for `GET /api/dishes/search/name`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Text to look for in names and origins.
    #[param(example = "paneer")]
    pub q: Option<String>,
}

/// Body of `POST /api/dishes/by-ingredients`.
///
/// The list is kept as raw JSON so a wrong shape yields the same message as
/// a missing one.
#[derive(Debug, Deserialize, ToSchema)]
pub struct IngredientsRequest {
    #[serde(default)]
    #[schema(value_type = Vec<String>, example = json!(["rice", "ghee"]))]
    pub ingredients: Value,
}

impl TryFrom<IngredientsRequest> for IngredientQuery {
    type Error = Error;

    fn try_from(value: IngredientsRequest) -> Result<Self, Self::Error> {
        let required = || missing_field_error(INGREDIENTS, "Ingredients array is required");
        let Value::Array(items) = value.ingredients else {
            return Err(required());
        };
        let names = items
            .into_iter()
            .map(|item| match item {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(required)?;
        if names.is_empty() {
            return Err(required());
        }
        Ok(IngredientQuery::new(names))
    }
}

/// Query string for `GET /api/dishes/filter`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    /// `vegetarian` or `non vegetarian`.
    #[param(example = "vegetarian")]
    pub diet: Option<String>,
    pub flavor_profile: Option<String>,
    pub course: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    /// Upper bound on preparation minutes, inclusive.
    #[serde(rename = "maxPrepTime")]
    #[param(value_type = Option<u32>)]
    pub max_prep_time: Option<String>,
    /// Upper bound on cooking minutes, inclusive.
    #[serde(rename = "maxCookTime")]
    #[param(value_type = Option<u32>)]
    pub max_cook_time: Option<String>,
}

impl TryFrom<FilterQuery> for DishFilter {
    type Error = Error;

    fn try_from(value: FilterQuery) -> Result<Self, Self::Error> {
        let diet = non_blank(value.diet)
            .map(|raw| {
                raw.parse::<Diet>()
                    .map_err(|_| invalid_value_error(DIET, &raw, "vegetarian, non vegetarian"))
            })
            .transpose()?;
        Ok(DishFilter {
            diet,
            flavor_profile: non_blank(value.flavor_profile),
            course: non_blank(value.course),
            state: non_blank(value.state),
            region: non_blank(value.region),
            max_prep_time: parse_minutes(value.max_prep_time, MAX_PREP_TIME)?,
            max_cook_time: parse_minutes(value.max_cook_time, MAX_COOK_TIME)?,
        })
    }
}

/// Unpaginated result list returned by search, ingredient, and filter
/// queries.
#[derive(Debug, Serialize, ToSchema)]
pub struct DishResults {
    pub results: Vec<Dish>,
}

impl From<Vec<Dish>> for DishResults {
    fn from(results: Vec<Dish>) -> Self {
        Self { results }
    }
}

/// List dishes one page at a time.
#[utoipa::path(
    get,
    path = "/api/dishes",
    params(ListDishesQuery),
    responses(
        (status = 200, description = "Page of dishes", body = crate::inbound::http::schemas::DishPageSchema),
        (status = 400, description = "Invalid paging or sort parameters", body = Error),
        (status = 401, description = "Missing or invalid bearer token", body = Error),
    ),
    tags = ["dishes"],
    operation_id = "listDishes",
    security(("BearerToken" = []))
)]
#[get("/dishes")]
pub async fn list_dishes(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    query: web::Query<ListDishesQuery>,
) -> ApiResult<HttpResponse> {
    let query = DishListQuery::try_from(query.into_inner())?;
    let page = state.dishes.list(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// Search dish names, regions, states, and flavour profiles.
#[utoipa::path(
    get,
    path = "/api/dishes/search/name",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching dishes", body = DishResults),
        (status = 400, description = "Missing or unusable query", body = Error),
        (status = 401, description = "Missing or invalid bearer token", body = Error),
    ),
    tags = ["dishes"],
    operation_id = "searchDishes",
    security(("BearerToken" = []))
)]
#[get("/dishes/search/name")]
pub async fn search_dishes(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<DishResults>> {
    let text = query.into_inner().q.unwrap_or_default();
    let results = state.dishes.search(&text).await?;
    Ok(web::Json(results.into()))
}

/// Dishes that use every listed ingredient.
#[utoipa::path(
    post,
    path = "/api/dishes/by-ingredients",
    request_body = IngredientsRequest,
    responses(
        (status = 200, description = "Matching dishes", body = DishResults),
        (status = 400, description = "Ingredients missing or not a list of strings", body = Error),
        (status = 401, description = "Missing or invalid bearer token", body = Error),
    ),
    tags = ["dishes"],
    operation_id = "findDishesByIngredients",
    security(("BearerToken" = []))
)]
#[post("/dishes/by-ingredients")]
pub async fn find_by_ingredients(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    payload: web::Json<IngredientsRequest>,
) -> ApiResult<web::Json<DishResults>> {
    let query = IngredientQuery::try_from(payload.into_inner())?;
    let results = state.dishes.find_by_ingredients(&query).await?;
    Ok(web::Json(results.into()))
}

/// Dishes satisfying every supplied predicate.
#[utoipa::path(
    get,
    path = "/api/dishes/filter",
    params(FilterQuery),
    responses(
        (status = 200, description = "Matching dishes", body = DishResults),
        (status = 400, description = "Malformed predicate", body = Error),
        (status = 401, description = "Missing or invalid bearer token", body = Error),
    ),
    tags = ["dishes"],
    operation_id = "filterDishes",
    security(("BearerToken" = []))
)]
#[get("/dishes/filter")]
pub async fn filter_dishes(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    query: web::Query<FilterQuery>,
) -> ApiResult<web::Json<DishResults>> {
    let filter = DishFilter::try_from(query.into_inner())?;
    let results = state.dishes.filter(&filter).await?;
    Ok(web::Json(results.into()))
}

/// Fetch one dish by identifier.
#[utoipa::path(
    get,
    path = "/api/dishes/{id}",
    params(("id" = String, Path, description = "Dish identifier")),
    responses(
        (status = 200, description = "The dish", body = Dish),
        (status = 401, description = "Missing or invalid bearer token", body = Error),
        (status = 404, description = "Dish not found", body = Error),
    ),
    tags = ["dishes"],
    operation_id = "getDish",
    security(("BearerToken" = []))
)]
#[get("/dishes/{id}")]
pub async fn get_dish(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<Dish>> {
    let id = DishId::new(path.into_inner()).map_err(|_| Error::not_found("Dish not found"))?;
    let dish = state.dishes.get(&id).await?;
    Ok(web::Json(dish))
}

/// Register the dish routes in match order.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_dishes)
        .service(search_dishes)
        .service(find_by_ingredients)
        .service(filter_dishes)
        .service(get_dish);
}

#[cfg(test)]
#[path = "dishes_tests.rs"]
mod tests;

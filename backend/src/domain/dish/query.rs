//! Query parameters understood by the dish catalogue.

use std::cmp::Ordering;
use std::str::FromStr;

use pagination::PageRequest;

use super::{Diet, Dish, locale_cmp};

/// Errors raised when parsing sort parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortParseError {
    #[error("unknown sort key '{value}'")]
    UnknownKey { value: String },
    #[error("sort order must be 'asc' or 'desc' (got '{value}')")]
    UnknownDirection { value: String },
}

/// Dish attribute a listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishSortKey {
    Id,
    Name,
    Ingredients,
    Diet,
    PrepTime,
    CookTime,
    FlavorProfile,
    Course,
    State,
    Region,
}

impl DishSortKey {
    /// Compare two dishes by this attribute in ascending order.
    pub fn compare(self, left: &Dish, right: &Dish) -> Ordering {
        match self {
            Self::Id => locale_cmp(left.id().as_ref(), right.id().as_ref()),
            Self::Name => locale_cmp(left.name(), right.name()),
            Self::Ingredients => compare_lists(left.ingredients(), right.ingredients()),
            Self::Diet => locale_cmp(left.diet().as_str(), right.diet().as_str()),
            Self::PrepTime => left.prep_time().cmp(&right.prep_time()),
            Self::CookTime => left.cook_time().cmp(&right.cook_time()),
            Self::FlavorProfile => locale_cmp(left.flavor_profile(), right.flavor_profile()),
            Self::Course => locale_cmp(left.course(), right.course()),
            Self::State => locale_cmp(left.state(), right.state()),
            Self::Region => locale_cmp(left.region(), right.region()),
        }
    }
}

fn compare_lists(left: &[String], right: &[String]) -> Ordering {
    left.iter()
        .zip(right)
        .map(|(a, b)| locale_cmp(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| left.len().cmp(&right.len()))
}

impl FromStr for DishSortKey {
    type Err = SortParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = match value {
            "id" => Self::Id,
            "name" => Self::Name,
            "ingredients" => Self::Ingredients,
            "diet" => Self::Diet,
            "prep_time" => Self::PrepTime,
            "cook_time" => Self::CookTime,
            "flavor_profile" => Self::FlavorProfile,
            "course" => Self::Course,
            "state" => Self::State,
            "region" => Self::Region,
            other => {
                return Err(SortParseError::UnknownKey {
                    value: other.to_owned(),
                });
            }
        };
        Ok(key)
    }
}

/// Sort direction; ascending unless asked otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = SortParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(SortParseError::UnknownDirection {
                value: other.to_owned(),
            }),
        }
    }
}

/// Sort key paired with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishSort {
    key: DishSortKey,
    direction: SortDirection,
}

impl DishSort {
    pub fn new(key: DishSortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Compare two dishes. Ties stay `Equal` in both directions, so a stable
    /// sort keeps their original relative order.
    pub fn compare(&self, left: &Dish, right: &Dish) -> Ordering {
        self.direction.apply(self.key.compare(left, right))
    }

    /// Stable in-place sort of `dishes`.
    pub fn sort(&self, dishes: &mut [Dish]) {
        dishes.sort_by(|a, b| self.compare(a, b));
    }
}

/// Parameters for a paginated catalogue listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DishListQuery {
    page: PageRequest,
    sort: Option<DishSort>,
}

impl DishListQuery {
    pub fn new(page: PageRequest, sort: Option<DishSort>) -> Self {
        Self { page, sort }
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn sort(&self) -> Option<DishSort> {
        self.sort
    }
}

/// Conjunction of optional dish predicates.
///
/// An empty filter matches every dish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishFilter {
    pub diet: Option<Diet>,
    pub flavor_profile: Option<String>,
    pub course: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub max_prep_time: Option<u32>,
    pub max_cook_time: Option<u32>,
}

impl DishFilter {
    /// Whether `dish` satisfies every present predicate.
    pub fn matches(&self, dish: &Dish) -> bool {
        self.diet.is_none_or(|diet| dish.diet() == diet)
            && equals(self.flavor_profile.as_deref(), dish.flavor_profile())
            && equals(self.course.as_deref(), dish.course())
            && equals(self.state.as_deref(), dish.state())
            && equals(self.region.as_deref(), dish.region())
            && self.max_prep_time.is_none_or(|max| dish.prep_time() <= max)
            && self.max_cook_time.is_none_or(|max| dish.cook_time() <= max)
    }
}

fn equals(expected: Option<&str>, actual: &str) -> bool {
    expected.is_none_or(|value| value == actual)
}

/// Ingredients a dish must contain, compared case-insensitively.
///
/// # Examples
/// ```
/// use dishes_backend::domain::IngredientQuery;
///
/// let query = IngredientQuery::new(["Rice", "ghee"]);
/// assert_eq!(query.ingredients(), ["rice", "ghee"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientQuery {
    needles: Vec<String>,
}

impl IngredientQuery {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            needles: ingredients
                .into_iter()
                .map(|ingredient| ingredient.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn ingredients(&self) -> &[String] {
        &self.needles
    }

    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }

    /// Every requested ingredient must be a substring of at least one of the
    /// dish's own ingredients. An empty query matches nothing.
    pub fn matches(&self, dish: &Dish) -> bool {
        if self.needles.is_empty() {
            return false;
        }
        let haystack: Vec<String> = dish
            .ingredients()
            .iter()
            .map(|ingredient| ingredient.to_lowercase())
            .collect();
        self.needles
            .iter()
            .all(|needle| haystack.iter().any(|item| item.contains(needle.as_str())))
    }
}

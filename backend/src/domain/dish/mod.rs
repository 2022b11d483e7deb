//! Dish catalogue domain types.
//!
//! A [`Dish`] is immutable once loaded; the query engine only reads, sorts,
//! and slices the collection handed over by the dish repository port.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod collation;
mod query;
mod search;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
mod tests;

pub use collation::locale_cmp;
pub use query::{
    DishFilter, DishListQuery, DishSort, DishSortKey, IngredientQuery, SortDirection,
    SortParseError,
};
pub use search::{DishMatcher, SearchMode, SearchModeParseError, SearchQueryError};

/// Validation errors returned by [`Dish::new`] and the dish newtypes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DishValidationError {
    /// A required text field was blank.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    /// The diet tag was not one of the known values.
    #[error("unknown diet '{value}'")]
    UnknownDiet { value: String },
}

/// Opaque, stable dish identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DishId(String);

impl DishId {
    /// Validate and construct a [`DishId`].
    pub fn new(id: impl Into<String>) -> Result<Self, DishValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DishValidationError::EmptyField { field: "dish.id" });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for DishId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DishId> for String {
    fn from(value: DishId) -> Self {
        value.0
    }
}

impl TryFrom<String> for DishId {
    type Error = DishValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Diet tag carried by every dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Diet {
    #[serde(rename = "vegetarian")]
    Vegetarian,
    #[serde(rename = "non vegetarian")]
    NonVegetarian,
}

impl Diet {
    /// Wire representation used by the dataset and query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::NonVegetarian => "non vegetarian",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = DishValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "vegetarian" => Ok(Self::Vegetarian),
            "non vegetarian" => Ok(Self::NonVegetarian),
            other => Err(DishValidationError::UnknownDiet {
                value: other.to_owned(),
            }),
        }
    }
}

/// Input payload for [`Dish::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishDraft {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub diet: Diet,
    pub prep_time: u32,
    pub cook_time: u32,
    pub flavor_profile: String,
    pub course: String,
    pub state: String,
    pub region: String,
}

/// Catalogue entry as served to clients.
///
/// ## Invariants
/// - `id` and `name` are non-blank.
/// - Preparation and cook times are whole minutes and never negative.
///
/// # Examples
/// ```
/// use dishes_backend::domain::{Diet, Dish, DishDraft};
///
/// let dish = Dish::new(DishDraft {
///     id: "kheer".into(),
///     name: "Kheer".into(),
///     ingredients: vec!["milk".into(), "rice".into()],
///     diet: Diet::Vegetarian,
///     prep_time: 10,
///     cook_time: 40,
///     flavor_profile: "sweet".into(),
///     course: "dessert".into(),
///     state: "-1".into(),
///     region: "-1".into(),
/// })
/// .expect("valid dish");
/// assert_eq!(dish.name(), "Kheer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Dish {
    #[schema(value_type = String, example = "5b0b3c5e-2f6b-4b4e-9d43-6f0d0c2e0c11")]
    id: DishId,
    #[schema(example = "Kheer")]
    name: String,
    ingredients: Vec<String>,
    diet: Diet,
    prep_time: u32,
    cook_time: u32,
    #[schema(example = "sweet")]
    flavor_profile: String,
    #[schema(example = "dessert")]
    course: String,
    state: String,
    region: String,
}

impl Dish {
    /// Validate and construct a dish.
    pub fn new(draft: DishDraft) -> Result<Self, DishValidationError> {
        let DishDraft {
            id,
            name,
            ingredients,
            diet,
            prep_time,
            cook_time,
            flavor_profile,
            course,
            state,
            region,
        } = draft;

        if name.trim().is_empty() {
            return Err(DishValidationError::EmptyField { field: "dish.name" });
        }

        Ok(Self {
            id: DishId::new(id)?,
            name,
            ingredients,
            diet,
            prep_time,
            cook_time,
            flavor_profile,
            course,
            state,
            region,
        })
    }

    pub fn id(&self) -> &DishId {
        &self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }
    pub fn diet(&self) -> Diet {
        self.diet
    }
    pub fn prep_time(&self) -> u32 {
        self.prep_time
    }
    pub fn cook_time(&self) -> u32 {
        self.cook_time
    }
    pub fn flavor_profile(&self) -> &str {
        self.flavor_profile.as_str()
    }
    pub fn course(&self) -> &str {
        self.course.as_str()
    }
    pub fn state(&self) -> &str {
        self.state.as_str()
    }
    pub fn region(&self) -> &str {
        self.region.as_str()
    }
}

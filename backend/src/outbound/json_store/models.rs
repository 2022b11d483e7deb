//! Persisted record shapes for `dishes.json` and `users.json`.
//!
//! These structs are internal to the store. They tolerate the sloppiness of
//! hand-edited or converted files (missing fields, numeric strings) and
//! translate to validated domain types at the boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{
    Diet, Dish, DishDraft, DishValidationError, EmailAddress, PasswordHash, Role, User, UserId,
    UserParts, UserValidationError, Username,
};

#[derive(Debug, Deserialize)]
pub(super) struct StoredDish {
    id: String,
    name: String,
    #[serde(default)]
    ingredients: Vec<String>,
    diet: String,
    #[serde(default, deserialize_with = "lenient_minutes")]
    prep_time: u32,
    #[serde(default, deserialize_with = "lenient_minutes")]
    cook_time: u32,
    #[serde(default)]
    flavor_profile: String,
    #[serde(default)]
    course: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    region: String,
}

impl TryFrom<StoredDish> for Dish {
    type Error = DishValidationError;

    fn try_from(value: StoredDish) -> Result<Self, Self::Error> {
        let diet: Diet = value.diet.parse()?;
        Dish::new(DishDraft {
            id: value.id,
            name: value.name,
            ingredients: value.ingredients,
            diet,
            prep_time: value.prep_time,
            cook_time: value.cook_time,
            flavor_profile: value.flavor_profile,
            course: value.course,
            state: value.state,
            region: value.region,
        })
    }
}

/// Whole minutes from a number or numeric string; anything else is zero.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let minutes = match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    };
    Ok(minutes.unwrap_or(0))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StoredUser {
    id: String,
    username: String,
    email: String,
    password: String,
    #[serde(default)]
    role: Role,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&User> for StoredUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            password: user.password_hash().as_str().to_owned(),
            role: user.role(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

impl TryFrom<StoredUser> for User {
    type Error = UserValidationError;

    fn try_from(value: StoredUser) -> Result<Self, Self::Error> {
        Ok(User::from_parts(UserParts {
            id: UserId::new(&value.id)?,
            username: Username::new(&value.username)?,
            email: EmailAddress::new(&value.email)?,
            password_hash: PasswordHash::new(value.password)?,
            role: value.role,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }))
    }
}

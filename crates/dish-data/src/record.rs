//! On-disk dish record shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One dish as stored in `dishes.json`.
///
/// Field names are the persisted contract; the backend deserialises the same
/// document. Times are whole minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishRecord {
    /// Stable identifier assigned at conversion time.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Ingredients in source order.
    pub ingredients: Vec<String>,
    /// `vegetarian` or `non vegetarian` in well-formed sources.
    pub diet: String,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    /// Dominant flavour, e.g. `sweet` or `spicy`.
    pub flavor_profile: String,
    /// Course, e.g. `dessert` or `main course`.
    pub course: String,
    /// State of origin.
    pub state: String,
    /// Region of origin.
    pub region: String,
}

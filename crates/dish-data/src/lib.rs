//! Dish source conversion for the catalogue service.
//!
//! The catalogue reads its dishes from a flat `dishes.json` collection. This
//! crate produces that collection from a delimiter-separated source with a
//! header row, and provides the atomic writer the backend also uses when it
//! rewrites its own collections.
//!
//! # Example
//!
//! ```
//! let source = "name,ingredients,diet,prep_time,cook_time,flavor_profile,course,state,region\n\
//!               Gajar ka halwa,\"Carrots, milk, sugar, ghee\",vegetarian,15,60,sweet,dessert,Punjab,North\n";
//!
//! let conversion = dish_data::convert_source(source).expect("valid source");
//! let dish = &conversion.dishes[0];
//!
//! assert_eq!(dish.name, "Gajar ka halwa");
//! assert_eq!(dish.cook_time, 60);
//! ```

mod atomic_io;
mod convert;
pub mod convert_cli;
mod csv;
mod error;
mod record;

pub use atomic_io::write_atomic;
pub use convert::{
    Conversion, SkippedRow, convert_file, convert_source, convert_source_with, encode_dishes,
};
pub use error::{ConversionError, WriteError};
pub use record::DishRecord;

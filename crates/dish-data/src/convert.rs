//! Conversion of tabular dish rows into [`DishRecord`] collections.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use uuid::Uuid;

use crate::atomic_io::write_atomic;
use crate::csv::{parse_minutes, split_ingredients, split_line};
use crate::error::{ConversionError, WriteError};
use crate::record::DishRecord;

const COLUMNS: [&str; 9] = [
    "name",
    "ingredients",
    "diet",
    "prep_time",
    "cook_time",
    "flavor_profile",
    "course",
    "state",
    "region",
];

/// A source row that was left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the source.
    pub line: usize,
    /// Number of fields the header declares.
    pub expected: usize,
    /// Number of fields the row carried.
    pub found: usize,
}

/// Result of converting a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Converted dishes in source order.
    pub dishes: Vec<DishRecord>,
    /// Rows whose field count disagreed with the header.
    pub skipped: Vec<SkippedRow>,
}

/// Convert a source document, assigning each dish a random UUID.
///
/// # Errors
///
/// Returns [`ConversionError::MissingHeader`] for an empty document and
/// [`ConversionError::MissingColumn`] when the header lacks a dish field.
///
/// # Example
///
/// ```
/// let source = "name,ingredients,diet,prep_time,cook_time,flavor_profile,course,state,region\n\
///               Kheer,\"Milk, rice, sugar\",vegetarian,10,40,sweet,dessert,-1,-1\n";
/// let conversion = dish_data::convert_source(source).expect("convert");
///
/// assert_eq!(conversion.dishes.len(), 1);
/// assert_eq!(conversion.dishes[0].ingredients, ["Milk", "rice", "sugar"]);
/// ```
pub fn convert_source(source: &str) -> Result<Conversion, ConversionError> {
    convert_source_with(source, Uuid::new_v4)
}

/// Convert a source document using `next_id` for dish identifiers.
///
/// # Errors
///
/// See [`convert_source`].
pub fn convert_source_with<F>(source: &str, mut next_id: F) -> Result<Conversion, ConversionError>
where
    F: FnMut() -> Uuid,
{
    let mut lines = source.lines().enumerate();
    let header = lines
        .next()
        .map(|(_, line)| split_line(line))
        .filter(|fields| fields.iter().any(|field| !field.is_empty()))
        .ok_or(ConversionError::MissingHeader)?;
    let layout = ColumnLayout::from_header(&header)?;

    let mut dishes = Vec::new();
    let mut skipped = Vec::new();
    for (index, raw) in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let fields = split_line(line);
        if fields.len() != header.len() {
            skipped.push(SkippedRow {
                line: index + 1,
                expected: header.len(),
                found: fields.len(),
            });
            continue;
        }
        dishes.push(layout.record(&fields, next_id()));
    }

    Ok(Conversion { dishes, skipped })
}

/// Encode dishes as the pretty-printed JSON array stored on disk.
///
/// # Errors
///
/// Returns [`ConversionError::EncodeError`] if serialisation fails.
pub fn encode_dishes(dishes: &[DishRecord]) -> Result<String, ConversionError> {
    serde_json::to_string_pretty(dishes).map_err(|err| ConversionError::EncodeError {
        message: err.to_string(),
    })
}

/// Read `source_path`, convert it and atomically write `output_path`.
///
/// # Errors
///
/// Returns [`ConversionError`] when the source cannot be read or parsed, or
/// the output cannot be written.
pub fn convert_file(
    source_path: &Utf8Path,
    output_path: &Utf8Path,
) -> Result<Conversion, ConversionError> {
    let (source_dir, source_name) =
        open_parent(source_path).map_err(|message| ConversionError::ReadError {
            path: source_path.to_path_buf(),
            message,
        })?;
    let source = source_dir
        .read_to_string(source_name)
        .map_err(|err| ConversionError::ReadError {
            path: source_path.to_path_buf(),
            message: err.to_string(),
        })?;

    let conversion = convert_source(&source)?;
    let json = encode_dishes(&conversion.dishes)?;

    let (output_dir, output_name) = open_parent(output_path).map_err(|message| WriteError {
        path: output_path.to_path_buf(),
        message,
    })?;
    write_atomic(&output_dir, Utf8Path::new(output_name), &json).map_err(|err| WriteError {
        path: output_path.to_path_buf(),
        message: err.message,
    })?;

    Ok(conversion)
}

fn open_parent(path: &Utf8Path) -> Result<(Dir, &str), String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| "path has no file name".to_owned())?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| err.to_string())?;
    Ok((dir, file_name))
}

struct ColumnLayout {
    indices: [usize; COLUMNS.len()],
}

impl ColumnLayout {
    fn from_header(header: &[String]) -> Result<Self, ConversionError> {
        let mut indices = [0; COLUMNS.len()];
        for (slot, column) in indices.iter_mut().zip(COLUMNS) {
            *slot = header
                .iter()
                .position(|name| name == column)
                .ok_or(ConversionError::MissingColumn { column })?;
        }
        Ok(Self { indices })
    }

    fn record(&self, fields: &[String], id: Uuid) -> DishRecord {
        let [name, ingredients, diet, prep, cook, flavor, course, state, region] =
            self.indices.map(|index| fields.get(index).map_or("", String::as_str));
        DishRecord {
            id,
            name: name.to_owned(),
            ingredients: split_ingredients(ingredients),
            diet: diet.to_owned(),
            prep_time: parse_minutes(prep),
            cook_time: parse_minutes(cook),
            flavor_profile: flavor.to_owned(),
            course: course.to_owned(),
            state: state.to_owned(),
            region: region.to_owned(),
        }
    }
}

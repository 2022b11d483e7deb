//! CLI support for converting the dish source into `dishes.json`.
//!
//! The binary delegates to these functions so argument handling and report
//! formatting can be tested without spawning a process.

mod error;

use camino::{Utf8Path, Utf8PathBuf};

use crate::convert::{Conversion, SkippedRow, convert_file};

pub use error::CliError;

/// Parsed options for the conversion CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    source_path: Utf8PathBuf,
    output_path: Utf8PathBuf,
}

impl Options {
    /// Path of the delimiter-separated source.
    #[must_use]
    pub fn source_path(&self) -> &Utf8Path {
        &self.source_path
    }

    /// Path the JSON collection is written to.
    #[must_use]
    pub fn output_path(&self) -> &Utf8Path {
        &self.output_path
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments into conversion options.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown, lacks its value, or a
/// required flag is absent.
///
/// # Example
///
/// ```
/// use dish_data::convert_cli::{ParseOutcome, parse_args};
///
/// let args = ["--csv", "indian_food.csv", "--output", "dishes.json"].map(String::from);
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// assert_eq!(options.output_path(), camino::Utf8Path::new("dishes.json"));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut source_path: Option<Utf8PathBuf> = None;
    let mut output_path: Option<Utf8PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--csv" => source_path = Some(next_value(&mut args, "--csv")?.into()),
            "--output" => output_path = Some(next_value(&mut args, "--output")?.into()),
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(Options {
        source_path: source_path.ok_or(CliError::MissingFlag { flag: "--csv" })?,
        output_path: output_path.ok_or(CliError::MissingFlag { flag: "--output" })?,
    }))
}

/// Runs the conversion described by `options`.
///
/// # Errors
///
/// Returns [`CliError::Conversion`] when reading, parsing or writing fails.
pub fn run_conversion(options: &Options) -> Result<Conversion, CliError> {
    Ok(convert_file(&options.source_path, &options.output_path)?)
}

/// Formats the warning printed for a skipped row.
#[must_use]
pub fn skipped_row_warning(row: &SkippedRow) -> String {
    format!(
        "Skipping line {}: inconsistent column count (expected {}, found {})",
        row.line, row.expected, row.found
    )
}

/// Formats the success message emitted by the CLI.
#[must_use]
pub fn success_message(conversion: &Conversion, output_path: &Utf8Path) -> String {
    format!(
        "Converted {} dishes to {output_path} ({} rows skipped)",
        conversion.dishes.len(),
        conversion.skipped.len()
    )
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

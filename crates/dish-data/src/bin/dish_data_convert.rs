//! Converts the tabular dish source into the catalogue's `dishes.json`.
//!
//! Parsing and conversion live in `dish_data::convert_cli`; this binary only
//! wires them to the process streams.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use dish_data::convert_cli::{
    CliError, ParseOutcome, parse_args, run_conversion, skipped_row_warning, success_message,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            drop(writeln!(io::stderr().lock(), "{err}"));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let options = match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            return Ok(());
        }
        ParseOutcome::Options(options) => options,
    };

    let conversion = run_conversion(&options)?;
    let mut stderr = io::stderr().lock();
    for row in &conversion.skipped {
        drop(writeln!(stderr, "{}", skipped_row_warning(row)));
    }
    drop(writeln!(
        io::stdout().lock(),
        "{}",
        success_message(&conversion, options.output_path())
    ));
    Ok(())
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: dish-data-convert --csv <path> --output <path>\n",
        "\n",
        "Options:\n",
        "  --csv <path>       Delimiter-separated dish source with a header row\n",
        "  --output <path>    Destination for the JSON dish collection\n",
        "  -h, --help         Print this help output\n",
    );
    drop(out.write_all(usage.as_bytes()));
}

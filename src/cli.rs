use std::fmt;
use std::path::PathBuf;

use crate::config::{Config, DisplayMode, Radix, Source};
use crate::exit_code;

/// Result of scanning the argument list. Help is a distinct outcome so the
/// caller decides how to exit instead of the parser terminating the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Help,
    Run(Config),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument(String);

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvalidArgument {}

/// Scans arguments left to right. Flags are recognized by exact match;
/// anything else is validated as a file path and kept in argument order.
/// The scan stops at the first `-h`/`--help`, so arguments after it are
/// never validated.
pub fn parse<I, S>(args: I) -> Result<ParseOutcome, InvalidArgument>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut verbose = false;
    let mut show_line_numbers = false;
    let mut show_total_char_count = false;
    let mut mode = DisplayMode::Characters;
    let mut sources = Vec::new();

    for arg in args {
        match arg.as_ref() {
            "-v" | "--verbose" => verbose = true,
            "-n" | "--show-line-nos" => show_line_numbers = true,
            "-c" | "--show-char-count" => show_total_char_count = true,
            "-2" | "--binary" => mode = DisplayMode::Numeric(Radix::Binary),
            "-8" | "--octal" => mode = DisplayMode::Numeric(Radix::Octal),
            "-10" | "--decimal" => mode = DisplayMode::Numeric(Radix::Decimal),
            "-16" | "--hexadecimal" => mode = DisplayMode::Numeric(Radix::Hexadecimal),
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            path => sources.push(Source::File(validate_path(path)?)),
        }
    }

    if sources.is_empty() {
        sources.push(Source::Stdin);
    }

    Ok(ParseOutcome::Run(Config {
        verbose,
        show_line_numbers,
        show_total_char_count,
        mode,
        sources,
    }))
}

fn validate_path(arg: &str) -> Result<PathBuf, InvalidArgument> {
    let path = PathBuf::from(arg);
    if !path.exists() {
        return Err(InvalidArgument(format!(
            "File cannot be located: {}",
            path.display()
        )));
    }
    if path.is_dir() {
        return Err(InvalidArgument(format!(
            "Cannot operate on a directory: {}",
            path.display()
        )));
    }
    Ok(path)
}

pub fn help_text() -> String {
    format!(
        "\
Purpose:  Concatenates files and prints on the standard output
Usage:    rcat [-<option1>[ -<option2...>]] [filename1[ filename2...]]
Version:  {version}
Options:
    --verbose,         -v     Enables verbose mode
    --show-line-nos,   -n     Shows line numbers
    --show-char-count, -c     Shows character counts
    --binary,          -2     Shows file contents in binary representation instead of characters
    --octal,           -8     Shows file contents in octal representation instead of characters
    --decimal,         -10    Shows file contents in decimal representation instead of characters
    --hexadecimal,     -16    Shows file contents in hexadecimal representation instead of characters
    --help,            -h     Shows this help menu
Exit codes:
    {normal}    Successful completion
    {error}    Invalid argument
    {file}    File I/O error
    {fatal}    Unknown application error
",
        version = env!("CARGO_PKG_VERSION"),
        normal = exit_code::NORMAL,
        error = exit_code::ERROR,
        file = exit_code::FILE,
        fatal = exit_code::FATAL,
    )
}

mod cli;
pub mod config;
pub mod exit_code;
mod printer;

pub use cli::{help_text, parse, InvalidArgument, ParseOutcome};
pub use config::{Config, DisplayMode, Radix, Source};

use std::io::{self, BufWriter};

use anyhow::Result;

pub fn run(config: &Config) -> Result<()> {
    let stdout = BufWriter::new(io::stdout().lock());
    printer::StreamPrinter::new(config, stdout).print_all()
}

use std::fs::File;
use std::io::{self, BufReader, Read, Write};

use anyhow::{Context, Result};

use crate::config::{Config, DisplayMode, Radix, Source};

const SOURCE_DIVIDER: &str = "-----------------------------";
const TOTAL_DIVIDER: &str = "==============================";

/// Single-pass byte printer. Reads each configured source in order,
/// writing bytes (or their radix renderings) plus the optional banners,
/// line numbers and summaries to `out`.
pub struct StreamPrinter<'a, W> {
    config: &'a Config,
    out: W,
    total_line_count: u64,
    total_char_count: u64,
}

impl<'a, W: Write> StreamPrinter<'a, W> {
    pub fn new(config: &'a Config, out: W) -> Self {
        Self {
            config,
            out,
            total_line_count: 0,
            total_char_count: 0,
        }
    }

    pub fn print_all(&mut self) -> Result<()> {
        for source in &self.config.sources {
            self.print_source(source)?;
        }

        if self.config.verbose || self.config.show_total_char_count {
            writeln!(self.out, "{TOTAL_DIVIDER} ")?;
            writeln!(self.out, "[Total source count: {}] ", self.config.sources.len())?;
            writeln!(self.out, "[Total line count: {}] ", self.total_line_count)?;
            writeln!(self.out, "[Total character count: {}]", self.total_char_count)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn print_source(&mut self, source: &Source) -> Result<()> {
        let reader = open(source).with_context(|| format!("Failed to open {source}"))?;

        if self.config.verbose {
            writeln!(self.out, "[Source: {source}]: ")?;
        }

        let mut individual_line_count: u64 = 0;
        let mut individual_char_count: u64 = 0;
        let mut at_line_start = true;

        for byte in reader.bytes() {
            let byte = byte.with_context(|| format!("Failed to read from {source}"))?;

            if self.config.show_line_numbers && at_line_start {
                // Verbose mode numbers lines within the current source;
                // otherwise numbering runs across all sources.
                let line_number = if self.config.verbose {
                    individual_line_count
                } else {
                    self.total_line_count
                } + 1;
                write!(self.out, "{line_number:>6}  ")?;
                at_line_start = false;
            }

            match self.config.mode {
                DisplayMode::Characters => self.out.write_all(&[byte])?,
                DisplayMode::Numeric(_) if byte == b'\n' => writeln!(self.out)?,
                DisplayMode::Numeric(radix) => write_radix(&mut self.out, byte, radix)?,
            }

            individual_char_count += 1;
            if byte == b'\n' {
                individual_line_count += 1;
                self.total_line_count += 1;
                at_line_start = true;
            }
        }

        if self.config.verbose {
            writeln!(self.out, "{SOURCE_DIVIDER} ")?;
            writeln!(self.out, "[Line count: {individual_line_count}] ")?;
            writeln!(self.out, "[Character count: {individual_char_count}] ")?;
            writeln!(self.out, "{SOURCE_DIVIDER} ")?;
            writeln!(self.out)?;
        }

        self.total_char_count += individual_char_count;
        Ok(())
    }
}

fn open(source: &Source) -> io::Result<Box<dyn Read>> {
    match source {
        Source::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        Source::Stdin => Ok(Box::new(io::stdin().lock())),
    }
}

fn write_radix<W: Write>(out: &mut W, byte: u8, radix: Radix) -> io::Result<()> {
    match radix {
        Radix::Binary => write!(out, "{byte:b}"),
        Radix::Octal => write!(out, "{byte:o}"),
        Radix::Decimal => write!(out, "{byte}"),
        Radix::Hexadecimal => write!(out, "{byte:x}"),
    }
}

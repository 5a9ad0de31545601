use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub verbose: bool,
    pub show_line_numbers: bool,
    pub show_total_char_count: bool,
    pub mode: DisplayMode,
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Characters,
    Numeric(Radix),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => f.write_str("<Standard Input Stream>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_source_displays_its_path() {
        let source = Source::File(PathBuf::from("data/input.txt"));
        assert_eq!(source.to_string(), "data/input.txt");
    }

    #[test]
    fn stdin_source_displays_stream_marker() {
        assert_eq!(Source::Stdin.to_string(), "<Standard Input Stream>");
    }
}

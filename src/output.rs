//! Terminal output formatting for the mapinfo CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs go to stderr;
//! stdout is reserved for machine-readable output (JSON, INI).

use std::io::{self, IsTerminal, Write};

use crate::types::MapDescriptor;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// e.g. "     Loading INI/MPMaps.ini"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Format a string as bold.
    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    /// One-line map summary: `Name (2-4 players) Maps\path`.
    pub fn map_summary(&self, map: &MapDescriptor) -> String {
        let mut line = format!(
            "{} {}",
            self.bold(map.name()),
            player_range(map.min_players(), map.max_players())
        );
        if map.is_coop() {
            line.push_str(" [coop]");
        }
        line.push(' ');
        line.push_str(&self.dim(map.base_path()));
        line
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "map", "maps")` → "1 map".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Player count range: "(4 players)", "(2-4 players)".
pub fn player_range(min: i32, max: i32) -> String {
    if min <= 0 || min == max {
        format!("({} players)", max)
    } else {
        format!("({}-{} players)", min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::IniFile;
    use crate::parser::{parse_custom_map_ini, RAW_MAP_SECTIONS};

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "map", "maps"), "1 map");
        assert_eq!(plural(0, "map", "maps"), "0 maps");
        assert_eq!(plural(5, "map", "maps"), "5 maps");
    }

    #[test]
    fn test_player_range() {
        assert_eq!(player_range(0, 4), "(4 players)");
        assert_eq!(player_range(4, 4), "(4 players)");
        assert_eq!(player_range(2, 6), "(2-6 players)");
    }

    #[test]
    fn test_map_summary_plain() {
        let ini = IniFile::parse_sections(
            "[Basic]\nName=Twin Rivers\nMinPlayer=2\nMaxPlayer=4\nIsCoopMission=yes\n",
            RAW_MAP_SECTIONS,
        );
        let map = parse_custom_map_ini(&ini, "Maps/Custom/twin.map").unwrap();

        assert_eq!(
            Printer::plain().map_summary(&map),
            "Twin Rivers (2-4 players) [coop] Maps/Custom/twin.map"
        );
    }
}

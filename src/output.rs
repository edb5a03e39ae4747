//! Terminal output formatting for the addon-assets CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs.
//! All status output goes to stderr.

use std::io::{self, IsTerminal, Write};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits ANSI codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "     Drawing wizardiuz_staff_fire.png (16x16)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
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

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "file", "files")` → "1 file".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a path relative to `base` when possible, as given otherwise.
pub fn display_path(path: &std::path::Path, base: &std::path::Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_plural_singular() {
        assert_eq!(plural(1, "texture", "textures"), "1 texture");
    }

    #[test]
    fn test_plural_many() {
        assert_eq!(plural(12, "texture", "textures"), "12 textures");
    }

    #[test]
    fn test_display_path_relative() {
        let p = Path::new("/addon/dist/Wizardiuz_Staff.mcaddon");
        assert_eq!(display_path(p, Path::new("/addon")), "dist/Wizardiuz_Staff.mcaddon");
    }

    #[test]
    fn test_display_path_outside_base() {
        let p = Path::new("/elsewhere/file");
        assert_eq!(display_path(p, Path::new("/addon")), "/elsewhere/file");
    }

    #[test]
    fn test_display_path_base_itself() {
        assert_eq!(display_path(Path::new("/addon"), Path::new("/addon")), ".");
    }

    #[test]
    fn test_plain_printer_does_not_colour() {
        assert_eq!(Printer::plain().dim("x"), "x");
    }
}

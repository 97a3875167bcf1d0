//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::{self, Write};

use colored::Colorize;

/// Write error (red bold "error:" prefix) as a single line
pub fn error(w: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "{}: {}", "error".red().bold(), msg)
}

/// Write greeting line
pub fn greeting(w: &mut dyn Write, name: &str) -> io::Result<()> {
    writeln!(w, "Hello {}", name)
}

/// Write plain output (no color, for results and help text)
pub fn info(w: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "{}", msg)
}

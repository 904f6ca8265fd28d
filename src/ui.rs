//! Terminal output helpers. Everything here writes to stderr so stdout stays
//! reserved for command output.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a usage hint with a yellow arrow.
pub fn display_hint(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

use colored::Colorize;

use crate::cli::context::{self, Verbosity};

fn enabled() -> bool {
    context::verbosity() != Verbosity::Quiet
}

/// Print a success message.
pub fn success(msg: &str) {
    if enabled() {
        println!("  {} {}", "✓".green(), msg);
    }
}

/// Print an informational status message.
pub fn info(msg: &str) {
    if enabled() {
        println!("  {} {}", "→".cyan(), msg);
    }
}

/// Print a warning message.
pub fn warning(msg: &str) {
    if enabled() {
        println!("  {} {}", "⚠".yellow(), msg);
    }
}

/// Print an error message. Never suppressed.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    if enabled() {
        println!("\n{}", msg.bold());
    }
}

/// Print a detail line, only with `--verbose`.
pub fn detail(msg: &str) {
    if context::verbosity() == Verbosity::Verbose {
        println!("    {}", msg.dimmed());
    }
}

//! CLI console utilities

use colored::*;
use folio_core::error::{FolioError, UnifiedError};
use std::io::{self, Write};

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Report a failed command with its error code and context hint
    pub fn report(&self, err: &FolioError) {
        self.error(&format!("{} [{}]", err, err.error_code()));
        if let Some(hint) = err.context() {
            eprintln!("  {}", hint.dimmed());
        }
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.chars().count()).dimmed());
    }

    /// Print a separator
    pub fn print_separator(&self) {
        println!("{}", "-".repeat(50).dimmed());
    }

    /// Print an assistant answer
    pub fn answer(&self, text: &str) {
        println!("{} {}", "Folio:".cyan().bold(), text);
    }

    /// Print an input prompt without a newline
    pub fn prompt(&self, label: &str) -> io::Result<()> {
        print!("{} ", label.bold());
        io::stdout().flush()
    }
}

impl Default for CliConsole {
    fn default() -> Self {
        Self::new(true)
    }
}

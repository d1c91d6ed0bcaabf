//! CLI presenter for output formatting

use colored::*;

use super::replay::StepReport;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print one replayed step to stdout
    pub fn step(&self, report: &StepReport) {
        println!("{}", self.format_step(report));
    }

    /// Format one replayed step
    pub fn format_step(&self, report: &StepReport) -> String {
        let index = format!("[{:>3}]", report.index);
        let mut line = format!("{} {:<15}", index.dimmed(), report.action);

        if let Some(ref error) = report.error {
            line.push_str(&format!(" {} {}", "error:".red(), error));
            return line;
        }
        if let Some(ref outcome) = report.outcome {
            line.push_str(&format!(" {}", outcome));
        }
        if report.default_prevented == Some(true) {
            line.push_str(&format!(" {}", "(default suppressed)".yellow()));
        }
        line
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

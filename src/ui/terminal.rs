//! Terminal reporter.

use console::Term;
use std::io::Write;

use super::{should_use_colors, ReportTheme, Reporter, StatusKind};

/// Writes status lines to stdout.
pub struct ConsoleReporter {
    term: Term,
    theme: ReportTheme,
}

impl ConsoleReporter {
    /// Create a reporter, colouring prefixes when stdout supports it.
    pub fn new() -> Self {
        Self::with_theme(ReportTheme::for_terminal(should_use_colors()))
    }

    /// Create a reporter with an explicit theme.
    pub fn with_theme(theme: ReportTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn line(&mut self, kind: StatusKind, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_line(kind, msg)).ok();
    }

    fn header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }

    fn blank(&mut self) {
        writeln!(self.term).ok();
    }
}

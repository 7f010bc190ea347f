//! Mock reporter for testing.
//!
//! `MockReporter` implements the `Reporter` trait and captures every line
//! exactly as the console would print it without colour.

use super::{ReportTheme, Reporter, StatusKind};

/// Captures reported lines for later assertion.
#[derive(Debug, Default)]
pub struct MockReporter {
    lines: Vec<String>,
    kinds: Vec<StatusKind>,
}

impl MockReporter {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, in order, including headers and blanks.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of status lines of the given kind.
    pub fn count(&self, kind: StatusKind) -> usize {
        self.kinds.iter().filter(|k| **k == kind).count()
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Full captured output joined with newlines.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }
}

impl Reporter for MockReporter {
    fn line(&mut self, kind: StatusKind, msg: &str) {
        self.kinds.push(kind);
        self.lines.push(ReportTheme::plain().format_line(kind, msg));
    }

    fn header(&mut self, title: &str) {
        self.lines.push(ReportTheme::plain().format_header(title));
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }
}

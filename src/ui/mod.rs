//! Console reporting.
//!
//! This module provides:
//! - [`Reporter`] trait so checks never print directly
//! - [`ConsoleReporter`] for real terminal output
//! - [`MaskingReporter`] which scrubs credential values before forwarding
//! - [`MockReporter`] capturing lines for tests
//!
//! # Example
//!
//! ```
//! use verify_links::ui::{MockReporter, Reporter, StatusKind};
//!
//! let mut reporter = MockReporter::new();
//! reporter.success("OpenAI API Connected.");
//! assert_eq!(reporter.lines(), ["[SUCCESS] OpenAI API Connected."]);
//! assert_eq!(reporter.count(StatusKind::Success), 1);
//! ```

pub mod masking;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use masking::MaskingReporter;
pub use mock::MockReporter;
pub use terminal::ConsoleReporter;
pub use theme::{should_use_colors, ReportTheme};

/// Status of a reported line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Provider reachable and credential accepted.
    Success,
    /// Reachable, but something looked off.
    Warn,
    /// The check did not pass.
    Fail,
    /// Informational only.
    Info,
}

impl StatusKind {
    /// The bracketed prefix printed before the message.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Success => "[SUCCESS]",
            Self::Warn => "[WARN]",
            Self::Fail => "[FAIL]",
            Self::Info => "[INFO]",
        }
    }
}

/// Sink for human-readable diagnostics.
pub trait Reporter {
    /// Emit one status line.
    fn line(&mut self, kind: StatusKind, msg: &str);

    /// Emit a section header.
    fn header(&mut self, title: &str);

    /// Emit an empty line.
    fn blank(&mut self);

    /// Emit a `[SUCCESS]` line.
    fn success(&mut self, msg: &str) {
        self.line(StatusKind::Success, msg);
    }

    /// Emit a `[WARN]` line.
    fn warn(&mut self, msg: &str) {
        self.line(StatusKind::Warn, msg);
    }

    /// Emit a `[FAIL]` line.
    fn fail(&mut self, msg: &str) {
        self.line(StatusKind::Fail, msg);
    }

    /// Emit an `[INFO]` line.
    fn info(&mut self, msg: &str) {
        self.line(StatusKind::Info, msg);
    }
}

//! Visual theme and styling.

use console::Style;

use super::StatusKind;

/// Styles applied to status prefixes.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    /// Style for `[SUCCESS]` (green).
    pub success: Style,
    /// Style for `[WARN]` (orange).
    pub warning: Style,
    /// Style for `[FAIL]` (red bold).
    pub error: Style,
    /// Style for `[INFO]` (magenta).
    pub info: Style,
    /// Style for headers (bold).
    pub header: Style,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTheme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            header: Style::new(),
        }
    }

    /// Pick the coloured or plain theme.
    pub fn for_terminal(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    fn style(&self, kind: StatusKind) -> &Style {
        match kind {
            StatusKind::Success => &self.success,
            StatusKind::Warn => &self.warning,
            StatusKind::Fail => &self.error,
            StatusKind::Info => &self.info,
        }
    }

    /// Format a status line: styled prefix followed by the message.
    pub fn format_line(&self, kind: StatusKind, msg: &str) -> String {
        format!("{} {}", self.style(kind).apply_to(kind.prefix()), msg)
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("--- {} ---", title)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_line() {
        let theme = ReportTheme::plain();

        assert_eq!(
            theme.format_line(StatusKind::Fail, "OPENAI_API_KEY is missing or default."),
            "[FAIL] OPENAI_API_KEY is missing or default."
        );
    }

    #[test]
    fn plain_theme_formats_header() {
        let theme = ReportTheme::plain();

        assert_eq!(theme.format_header("Verifying Links"), "--- Verifying Links ---");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = ReportTheme::for_terminal(true);
        let line = theme.format_line(StatusKind::Success, "ok");

        assert!(line.contains("[SUCCESS]"));
        assert!(line.ends_with("ok"));
    }
}

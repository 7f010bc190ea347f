//! .env file parsing.
//!
//! Parses environment files in the standard KEY=value format.

use std::collections::HashMap;

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Exported: `export KEY=value`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Inline comments: `KEY=value # note` (unquoted values only)
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// # Example
///
/// ```
/// use verify_links::config::EnvFileParser;
///
/// let content = r#"
/// # Provider keys
/// GOOGLE_BOOKS_API_KEY=AIza-test
/// OPENAI_API_KEY="sk-test"
/// FIREBASE_PROJECT_ID=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("GOOGLE_BOOKS_API_KEY"), Some(&"AIza-test".to_string()));
/// assert_eq!(vars.get("OPENAI_API_KEY"), Some(&"sk-test".to_string()));
/// assert_eq!(vars.get("FIREBASE_PROJECT_ID"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content into a map of variables.
    ///
    /// Lines that are not assignments are skipped. A later assignment to the
    /// same key wins.
    pub fn parse(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some((key.to_string(), Self::parse_value(value.trim())))
    }

    /// Quoted values run to the matching quote; unquoted values end at a `#`
    /// that follows whitespace.
    fn parse_value(value: &str) -> String {
        for quote in ['"', '\''] {
            if let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.find(quote).map(|end| &rest[..end]))
            {
                return inner.to_string();
            }
        }

        Self::strip_inline_comment(value).to_string()
    }

    fn strip_inline_comment(value: &str) -> &str {
        let comment_start = value
            .char_indices()
            .find(|&(i, c)| c == '#' && value[..i].ends_with(char::is_whitespace))
            .map(|(i, _)| i);

        match comment_start {
            Some(i) => value[..i].trim_end(),
            None => value,
        }
    }
}

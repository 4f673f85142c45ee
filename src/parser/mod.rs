//! Heading extraction for markdown documents.
//!
//! Headings are found with a line-anchored pattern scan rather than a full
//! markdown parser: any line that starts with a run of `#` followed by
//! whitespace counts, including lines inside fenced code blocks.

pub mod utils;

pub use utils::slugify;

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// A heading found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Number of leading `#` characters (always at least 1)
    pub level: usize,
    /// Heading text with the marker and surrounding whitespace removed
    pub text: String,
    /// Zero-based line index in the source document
    pub line: usize,
}

fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Whitespace after the marker must stay on the same line.
    PATTERN.get_or_init(|| Regex::new(r"(?m)^(#+)[^\S\r\n]+(.*)$").unwrap())
}

/// Heading level of a single line, by the same rule [`parse_headings`] uses.
///
/// Returns the length of the leading `#` run when it is followed by
/// whitespace on the same line, `None` otherwise.
///
/// # Examples
///
/// ```
/// use mdtoc::parser::heading_level;
///
/// assert_eq!(heading_level("## Usage"), Some(2));
/// assert_eq!(heading_level("#hashtag"), None);
/// assert_eq!(heading_level("##"), None);
/// ```
pub fn heading_level(line: &str) -> Option<usize> {
    heading_pattern()
        .captures(line)
        .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0))
        .map(|caps| caps[1].len())
}

/// Extract every heading from markdown content, top to bottom.
///
/// # Examples
///
/// ```
/// use mdtoc::parser::parse_headings;
///
/// let headings = parse_headings("# Title\nintro\n## Usage\n#hashtag");
/// assert_eq!(headings.len(), 2);
/// assert_eq!(headings[1].level, 2);
/// assert_eq!(headings[1].text, "Usage");
/// assert_eq!(headings[1].line, 2);
/// ```
pub fn parse_headings(content: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut line = 0;
    let mut scanned = 0;

    for caps in heading_pattern().captures_iter(content) {
        let whole = caps.get(0).map_or(scanned, |m| m.start());
        line += content[scanned..whole].matches('\n').count();
        scanned = whole;

        let level = caps[1].len();
        let text = caps[2].trim().to_string();
        tracing::debug!(level, text = %text, line, "found heading");

        headings.push(Heading { level, text, line });
    }

    headings
}

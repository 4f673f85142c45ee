//! Table of contents generation.
//!
//! The generator is a pure function over the document text: headings are
//! extracted, turned into nested link entries, and the resulting block is
//! spliced in directly after the first line. Nothing else in the document is
//! touched.

use crate::parser::{Heading, parse_headings, slugify};
use serde::Serialize;

/// Title used for the generated section and excluded from its own entries.
pub const DEFAULT_TITLE: &str = "Table of Contents";

/// Indentation added per nesting level.
const INDENT: &str = "  ";

/// Knobs for TOC generation. The defaults produce the canonical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
    /// Text of the `## ` heading that opens the block
    pub title: String,
    /// Shallowest heading level that gets an entry
    pub min_level: usize,
    /// Deepest heading level that gets an entry, if bounded
    pub max_level: Option<usize>,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            min_level: 2,
            max_level: None,
        }
    }
}

/// One line of the generated table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: usize,
    pub text: String,
    pub slug: String,
}

impl TocEntry {
    /// Render as a markdown bullet, indented two spaces per level below 1.
    pub fn render(&self) -> String {
        format!(
            "{}- [{}](#{})",
            INDENT.repeat(self.level.saturating_sub(1)),
            self.text,
            self.slug
        )
    }
}

/// Derive TOC entries from extracted headings, preserving document order.
///
/// Headings below `min_level` (the document title, by default), above
/// `max_level`, or whose text is exactly the TOC title are skipped.
/// Duplicate slugs are kept as-is.
pub fn build_entries(headings: &[Heading], options: &TocOptions) -> Vec<TocEntry> {
    headings
        .iter()
        .filter(|h| {
            let keep = h.level >= options.min_level
                && h.level > 1
                && options.max_level.is_none_or(|max| h.level <= max)
                && h.text != options.title;
            if !keep {
                tracing::trace!(level = h.level, text = %h.text, "skipping heading");
            }
            keep
        })
        .map(|h| TocEntry {
            level: h.level,
            text: h.text.clone(),
            slug: slugify(&h.text),
        })
        .collect()
}

/// Render the TOC block: the title heading followed by one line per entry.
pub fn render_block(entries: &[TocEntry], options: &TocOptions) -> Vec<String> {
    std::iter::once(format!("## {}", options.title))
        .chain(entries.iter().map(TocEntry::render))
        .collect()
}

/// Entries the generator would emit for `document`.
pub fn entries(document: &str, options: &TocOptions) -> Vec<TocEntry> {
    build_entries(&parse_headings(document), options)
}

/// Insert a table of contents after the first line of `document`.
///
/// # Examples
///
/// ```
/// let out = mdtoc::generate("# Title\n## A\n### B\n## Table of Contents\n");
/// assert_eq!(
///     out,
///     "# Title\n## Table of Contents\n  - [A](#a)\n    - [B](#b)\n## A\n### B\n## Table of Contents"
/// );
/// ```
pub fn generate(document: &str) -> String {
    generate_with(document, &TocOptions::default())
}

/// [`generate`] with explicit options.
///
/// Lines are joined with `\n`, so a trailing newline in the input is not
/// carried over and `\r\n` endings are normalised.
pub fn generate_with(document: &str, options: &TocOptions) -> String {
    let entries = entries(document, options);
    tracing::debug!(entries = entries.len(), "generated table of contents");
    let block = render_block(&entries, options);

    let mut lines = document.lines();
    let first = lines.next();

    first
        .into_iter()
        .chain(block.iter().map(String::as_str))
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

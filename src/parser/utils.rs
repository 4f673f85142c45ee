//! Utility functions for heading parsing.
//!
//! Shared helpers used by the parser and the TOC generator.

use regex::Regex;
use std::sync::OnceLock;

/// Generate an anchor slug from heading text.
///
/// The text is lowercased, every character that is not a word character,
/// whitespace or `-` is removed, and each remaining whitespace run becomes a
/// single `-`. Word characters follow the Unicode-aware `\w` class of the
/// `regex` crate, so letters outside ASCII and `_` survive.
///
/// # Examples
///
/// ```
/// # use mdtoc::parser::utils::slugify;
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("API Reference"), "api-reference");
/// assert_eq!(slugify("snake_case  Names"), "snake_case-names");
/// ```
pub fn slugify(text: &str) -> String {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();

    let strip = STRIP.get_or_init(|| Regex::new(r"[^\w\s-]").unwrap());
    let spaces = SPACES.get_or_init(|| Regex::new(r"\s+").unwrap());

    let lowered = text.to_lowercase();
    let stripped = strip.replace_all(&lowered, "");
    spaces.replace_all(&stripped, "-").into_owned()
}

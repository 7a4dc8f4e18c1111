//! Anchor slugs for rendered items
//!
//! The table of contents and the item headings must produce the exact same
//! anchors, so both go through [`item_anchor`] and [`member_anchor`].

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9_\s-]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref HYPHENS: Regex = Regex::new(r"-+").unwrap();
}

/// Generate an anchor-safe slug from a string.
///
/// Lowercases the input, drops everything that is not an ASCII word
/// character, whitespace or a hyphen, turns whitespace runs into a hyphen
/// and collapses hyphen runs. Leading and trailing hyphens are kept.
/// Accented letters are dropped like punctuation.
///
/// # Examples
///
/// ```
/// use docweave::markdown::slug::slug;
///
/// assert_eq!(slug("Hello World"), "hello-world");
/// assert_eq!(slug("Counter-#secret"), "counter-secret");
/// assert_eq!(slug("Map<K, V>"), "mapk-v");
/// ```
pub fn slug(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = NON_SLUG_CHARS.replace_all(&lower, "");
    let hyphenated = WHITESPACE.replace_all(&kept, "-");
    HYPHENS.replace_all(&hyphenated, "-").into_owned()
}

/// Anchor of a top-level item
pub fn item_anchor(name: &str) -> String {
    slug(name)
}

/// Anchor of a class or interface member
pub fn member_anchor(parent: &str, member: &str) -> String {
    slug(&format!("{}-{}", parent, member))
}

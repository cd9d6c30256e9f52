//! Word count for article HTML
//!
//! The editor page shows a live word count next to the document. Tags are
//! replaced by spaces (so `<p>a</p><p>b</p>` counts two words), then the text
//! is split on whitespace. Entities are not decoded; `&amp;` counts as a word
//! when it stands alone, as it does on the page.

use regex::Regex;
use std::sync::OnceLock;

fn tag_regex() -> Option<&'static Regex> {
    static TAG_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]+>").ok()).as_ref()
}

/// Count the words of an HTML document
///
/// ```
/// use recipe_block_converter::word_count::count_words;
///
/// assert_eq!(count_words("<h2>Banana bread</h2>\n<p>Mash three bananas.</p>"), 5);
/// assert_eq!(count_words(""), 0);
/// ```
pub fn count_words(html: &str) -> usize {
    match tag_regex() {
        Some(regex) => regex.replace_all(html, " ").split_whitespace().count(),
        None => html.split_whitespace().count(),
    }
}

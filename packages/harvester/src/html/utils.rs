//! HTML utility functions for navigating and extracting data from parsed pages.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use unicode_normalization::UnicodeNormalization;

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static LABELLED_PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p[aria-label]").expect("valid selector"));

/// Flatten the text of an element.
///
/// Every descendant text node is trimmed, empty nodes are dropped and the
/// rest are concatenated without a separator. The result is NFC-composed and
/// no-break spaces are folded to plain spaces so labels match; every other
/// character is kept as written.
///
/// # Examples
/// ```
/// use scraper::Html;
/// use rollcall_harvester::html::flatten_text;
///
/// let html = Html::parse_fragment("<div> Vote Question: <b>On Passage</b> </div>");
/// assert_eq!(flatten_text(html.root_element()), "Vote Question:On Passage");
/// ```
pub fn flatten_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<String>()
        .nfc()
        .map(fold_space)
        .collect()
}

fn fold_space(c: char) -> char {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' => ' ',
        _ => c,
    }
}

/// Find the first anchor whose trimmed text equals `label`.
pub fn find_anchor_with_text<'a>(element: ElementRef<'a>, label: &str) -> Option<ElementRef<'a>> {
    element
        .select(&ANCHOR)
        .find(|a| a.text().collect::<String>().trim() == label)
}

/// Find the `index`-th anchor (0-based, document order).
pub fn nth_anchor(element: ElementRef<'_>, index: usize) -> Option<ElementRef<'_>> {
    element.select(&ANCHOR).nth(index)
}

/// Find the first paragraph whose `aria-label` satisfies `predicate`.
///
/// The predicate receives the label lower-cased.
pub fn find_labelled_paragraph<'a, F>(element: ElementRef<'a>, predicate: F) -> Option<&'a str>
where
    F: Fn(&str) -> bool,
{
    element
        .select(&LABELLED_PARAGRAPH)
        .filter_map(|p| p.value().attr("aria-label"))
        .find(|label| predicate(&label.to_lowercase()))
}

/// Get an attribute value from an element.
pub fn get_attribute<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

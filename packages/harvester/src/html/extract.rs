//! Selection of vote records from a listing page.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

/// One vote's markup block, not yet normalized.
pub type RawRecord<'a> = ElementRef<'a>;

/// Structural marker of a vote block on the listing page.
#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static VOTE_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.role-call-vote").expect("valid selector"));

/// Parse a listing page body.
pub fn parse_page(body: &str) -> Html {
    Html::parse_document(body)
}

/// Select every vote block in document order.
///
/// This is a pure structural filter; the count drives end-of-data detection.
pub fn extract_records(page: &Html) -> Vec<RawRecord<'_>> {
    page.select(&VOTE_CONTAINER).collect()
}

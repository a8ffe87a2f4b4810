//! Field normalization: one raw vote record in, one [`VoteEntry`] out.
//!
//! Only a missing "View Details" link fails a record. Every other field
//! degrades to a default (`"0"`, `""` or `N/A`) when it is absent or
//! malformed.

mod cleanup;
mod span;

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use scraper::{ElementRef, Selector};

use crate::error::RecordError;
use crate::html::{
    find_anchor_with_text, find_labelled_paragraph, flatten_text, get_attribute, nth_anchor,
    RawRecord,
};
use crate::types::{VoteEntry, VoteStatus, NOT_AVAILABLE};

pub use cleanup::{clean_identifier, clean_link};
pub use span::between;

/// Format of the leading date cell, e.g. `Jan 16, 2025, 11:48 AM`.
const SOURCE_DATE_FORMAT: &str = "%b %d, %Y, %I:%M %p";

/// Exported date format, e.g. `Jan 16, 2025`.
const OUTPUT_DATE_FORMAT: &str = "%b %d, %Y";

const DETAILS_LABEL: &str = "View Details";
const QUESTION_LABEL: &str = "Vote Question:";
const BILL_TITLE_LABEL: &str = "Bill Title & Description:";
const AUTHOR_LABEL: &str = "Author:";
const VOTE_TYPE_LABEL: &str = "Vote Type";

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static DATE_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.first-row.row-comment").expect("valid selector"));

/// Turns raw records into entries for one session year.
#[derive(Debug, Clone)]
pub struct FieldNormalizer {
    votes_base_url: String,
    year: i32,
}

impl FieldNormalizer {
    pub fn new(votes_base_url: impl Into<String>, year: i32) -> Self {
        Self {
            votes_base_url: votes_base_url.into().trim_end_matches('/').to_string(),
            year,
        }
    }

    /// Normalize one record.
    pub fn normalize(&self, record: RawRecord<'_>) -> Result<VoteEntry, RecordError> {
        let roll_call = roll_call_number(record)?;
        let text = flatten_text(record);

        let tally = tally(record);
        let link = clean_link(
            &format!("{}/{}{}", self.votes_base_url, self.year, roll_call),
            self.year,
        );
        let identifier = clean_identifier(roll_call, self.year);

        Ok(VoteEntry {
            identifier,
            tally,
            link,
            status: VoteStatus::from_text(&text),
            description: description(&text),
            bill_reference: bill_reference(record),
            date: vote_date(record),
        })
    }
}

/// Final path segment of the "View Details" href.
fn roll_call_number(record: ElementRef<'_>) -> Result<&str, RecordError> {
    let anchor =
        find_anchor_with_text(record, DETAILS_LABEL).ok_or(RecordError::MissingDetailsLink)?;
    let href = get_attribute(anchor, "href").ok_or(RecordError::MissingDetailsHref)?;
    Ok(href.rsplit('/').next().unwrap_or_default())
}

/// Reformat the leading date cell, or `N/A`.
fn vote_date(record: ElementRef<'_>) -> String {
    record
        .select(&DATE_ROW)
        .next()
        .and_then(|row| {
            let text = flatten_text(row);
            let date = text.split('|').next().unwrap_or_default().trim();
            format_vote_date(date)
        })
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Parse `Jan 16, 2025, 11:48 AM` and render it as `Jan 16, 2025`.
///
/// # Examples
/// ```
/// use rollcall_harvester::normalize::format_vote_date;
///
/// assert_eq!(format_vote_date("Jan 6, 2025, 2:05 PM"), Some("Jan 06, 2025".to_string()));
/// assert_eq!(format_vote_date("yesterday"), None);
/// ```
pub fn format_vote_date(text: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(text, SOURCE_DATE_FORMAT)
        .ok()
        .map(|dt| dt.format(OUTPUT_DATE_FORMAT).to_string())
}

/// `"{ayes}-{noes}"` from the labelled tally paragraphs.
fn tally(record: ElementRef<'_>) -> String {
    let ayes = find_labelled_paragraph(record, |l| l.contains("aye") || l.contains("yea"));
    let noes = find_labelled_paragraph(record, |l| l.contains("no") || l.contains("nay"));
    format!("{}-{}", tally_count(ayes), tally_count(noes))
}

/// Last comma-separated segment of a label such as `Yeas, 215`.
fn tally_count(label: Option<&str>) -> &str {
    label
        .and_then(|l| l.rsplit(',').next())
        .map(str::trim)
        .filter(|count| !count.is_empty())
        .unwrap_or("0")
}

/// `[text](href)` from the second anchor in the record, or `N/A`.
fn bill_reference(record: ElementRef<'_>) -> String {
    match nth_anchor(record, 1) {
        Some(anchor) => {
            let number = flatten_text(anchor);
            let href = get_attribute(anchor, "href").unwrap_or(NOT_AVAILABLE);
            format!("[{number}]({href})")
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Question text joined with the bill title, or the author when no title.
pub fn description(text: &str) -> String {
    let question = between(text, QUESTION_LABEL, &["Bill", "Author"]).unwrap_or_default();
    let secondary = between(text, BILL_TITLE_LABEL, &[VOTE_TYPE_LABEL])
        .or_else(|| between(text, AUTHOR_LABEL, &[VOTE_TYPE_LABEL]))
        .unwrap_or_default();
    format!("{question} {secondary}").trim().to_string()
}

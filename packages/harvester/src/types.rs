//! Core data types for the harvester.
//!
//! These types represent a roll-call vote as exported, plus the per-run
//! report returned by the pipeline.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{HarvesterError, RecordError};

/// Sentinel for fields that could not be extracted.
pub const NOT_AVAILABLE: &str = "N/A";

/// Outcome of a roll-call vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteStatus {
    Passed,
    Failed,
    /// Neither marker found in the record text.
    Unknown,
}

impl VoteStatus {
    /// Get the string value for CSV output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
            Self::Unknown => NOT_AVAILABLE,
        }
    }

    /// Detect the status from flattened record text. "Passed" wins.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text.contains("Passed") {
            Self::Passed
        } else if text.contains("Failed") {
            Self::Failed
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for VoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized roll-call vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteEntry {
    /// Roll-call number, cleaned of markup artifacts.
    pub identifier: String,

    /// `"{ayes}-{noes}"`.
    pub tally: String,

    /// Canonical detail-page URL.
    pub link: String,

    pub status: VoteStatus,

    /// Question text followed by bill title or author text.
    pub description: String,

    /// `[bill number](href)`, or `N/A`.
    pub bill_reference: String,

    /// `Jan 16, 2025` style date, or `N/A`.
    pub date: String,
}

impl VoteEntry {
    /// Display string combining identifier, tally and link.
    ///
    /// # Examples
    /// ```
    /// use rollcall_harvester::types::{VoteEntry, VoteStatus};
    ///
    /// let entry = VoteEntry {
    ///     identifier: "12".to_string(),
    ///     tally: "215-210".to_string(),
    ///     link: "https://clerk.house.gov/Votes/202512".to_string(),
    ///     status: VoteStatus::Passed,
    ///     description: String::new(),
    ///     bill_reference: "N/A".to_string(),
    ///     date: "N/A".to_string(),
    /// };
    /// assert_eq!(
    ///     entry.summary(),
    ///     "[12 (215-210)](https://clerk.house.gov/Votes/202512)"
    /// );
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        format!("[{} ({})]({})", self.identifier, self.tally, self.link)
    }
}

/// Collects entries across pages in extraction order.
///
/// Append-only: no sorting, no deduplication.
#[derive(Debug, Default)]
pub struct Accumulator {
    entries: Vec<VoteEntry>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: VoteEntry) {
        self.entries.push(entry);
    }

    pub fn all(&self) -> &[VoteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<VoteEntry> {
        self.entries
    }
}

/// A record that failed normalization and was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub page: u32,
    /// Position of the record on its page (0-based).
    pub index: usize,
    pub reason: RecordError,
}

/// Why pagination ended.
#[derive(Debug)]
pub enum StopReason {
    /// Second consecutive short page; `page` itself was not processed.
    EndOfData { page: u32 },

    /// Fetching `page` failed; everything before it was kept.
    TransportFailure { page: u32, error: HarvesterError },
}

/// Result of one harvest run.
#[derive(Debug)]
pub struct HarvestReport {
    /// Entries in page-then-record order.
    pub entries: Vec<VoteEntry>,

    /// Pages fetched successfully, including the terminating short page.
    pub pages_fetched: u32,

    pub skipped: Vec<SkippedRecord>,

    pub stop: StopReason,
}

impl HarvestReport {
    /// Whether the run ended on a transport failure.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        matches!(self.stop, StopReason::TransportFailure { .. })
    }

    /// Skip reasons with their counts, most frequent first.
    #[must_use]
    pub fn skip_summary(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for skipped in &self.skipped {
            *counts.entry(skipped.reason.to_string()).or_default() += 1;
        }
        let mut summary: Vec<_> = counts.into_iter().collect();
        summary.sort_by(|a, b| b.1.cmp(&a.1));
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(identifier: &str) -> VoteEntry {
        VoteEntry {
            identifier: identifier.to_string(),
            tally: "0-0".to_string(),
            link: format!("https://clerk.house.gov/Votes/2025{identifier}"),
            status: VoteStatus::Unknown,
            description: String::new(),
            bill_reference: NOT_AVAILABLE.to_string(),
            date: NOT_AVAILABLE.to_string(),
        }
    }

    #[test]
    fn test_status_from_text() {
        assert_eq!(VoteStatus::from_text("Result:Passed"), VoteStatus::Passed);
        assert_eq!(VoteStatus::from_text("Result:Failed"), VoteStatus::Failed);
        assert_eq!(VoteStatus::from_text("Failed then Passed"), VoteStatus::Passed);
        assert_eq!(VoteStatus::from_text("Agreed to"), VoteStatus::Unknown);
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(VoteStatus::Passed.as_str(), "Passed");
        assert_eq!(VoteStatus::Failed.to_string(), "Failed");
        assert_eq!(VoteStatus::Unknown.as_str(), "N/A");
    }

    #[test]
    fn test_accumulator_keeps_order_and_duplicates() {
        let mut acc = Accumulator::new();
        assert!(acc.is_empty());
        acc.append(entry("3"));
        acc.append(entry("1"));
        acc.append(entry("3"));
        let ids: Vec<_> = acc.all().iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "3"]);
        assert_eq!(acc.len(), 3);
        assert_eq!(acc.into_entries().len(), 3);
    }

    #[test]
    fn test_skip_summary() {
        let skipped = |index, reason| SkippedRecord {
            page: 1,
            index,
            reason,
        };
        let report = HarvestReport {
            entries: Vec::new(),
            pages_fetched: 1,
            skipped: vec![
                skipped(0, RecordError::MissingDetailsHref),
                skipped(1, RecordError::MissingDetailsLink),
                skipped(2, RecordError::MissingDetailsLink),
            ],
            stop: StopReason::EndOfData { page: 2 },
        };
        assert!(!report.is_partial());
        assert_eq!(
            report.skip_summary(),
            vec![
                ("No 'View Details' link in vote record".to_string(), 2),
                ("'View Details' link has no href".to_string(), 1),
            ]
        );
    }
}

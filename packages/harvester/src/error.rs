//! Error types for the harvester.
//!
//! Uses the dual-error pattern: `HarvesterError` for library consumers
//! with detailed error context, and `RecordError` for failures scoped to a
//! single vote record, which the pipeline recovers from.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Invalid URL in configuration.
    #[error("Invalid URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidUrl(String),

    /// Page-size threshold out of range.
    #[error("Invalid page-size threshold: {0}. Expected a value of at least 1")]
    InvalidThreshold(usize),

    /// Malformed extra request header.
    #[error("Invalid header: '{0}'. Expected 'Name: value'")]
    InvalidHeader(String),

    /// Session year out of range.
    #[error("Invalid year: {0}. Expected a year between 1789 and 9999")]
    InvalidYear(i32),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Failed to download a listing page.
    #[error("Failed to download listing page {page}: {source}")]
    PageDownload {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;

/// Failure to normalize one vote record.
///
/// Only structural problems fail a record; malformed or missing fields
/// degrade to sentinel values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// No anchor labelled "View Details" in the record.
    #[error("No 'View Details' link in vote record")]
    MissingDetailsLink,

    /// The "View Details" anchor has no href.
    #[error("'View Details' link has no href")]
    MissingDetailsHref,
}

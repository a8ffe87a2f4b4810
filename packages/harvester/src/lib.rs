//! Roll-call Harvester - Scrape House roll-call votes into CSV.
//!
//! This crate walks the paginated roll-call listing of the House Clerk
//! site, extracts each vote from its markup, normalizes the inconsistent
//! text and writes a fixed five-column CSV export.
//!
//! # Example
//!
//! ```
//! use rollcall_harvester::config::{validate_url, HarvestConfig};
//!
//! let config = HarvestConfig::default().with_page_size_threshold(10);
//! assert!(config.validate().is_ok());
//! assert!(validate_url("https://clerk.house.gov/Votes").is_ok());
//! ```
//!
//! # Architecture
//!
//! The harvester is one sequential pipeline:
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (VoteEntry, Accumulator, HarvestReport)
//! - [`error`]: Error types and Result alias
//! - [`http`]: Page sources, including the blocking HTTP client
//! - [`paginator`]: Page iteration and end-of-data detection
//! - [`html`]: HTML utilities and vote-record extraction
//! - [`normalize`]: Per-record field normalization
//! - [`export`]: CSV output
//! - [`cli`]: Command-line interface
//! - [`harvester`]: Main harvester service

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod harvester;
pub mod html;
pub mod http;
pub mod normalize;
pub mod paginator;
pub mod types;

// Re-export main functions
pub use harvester::{harvest, harvest_votes, harvest_with_progress};

// Re-export commonly used items
pub use config::HarvestConfig;
pub use error::{HarvesterError, RecordError, Result};
pub use export::{export, save_csv};
pub use http::{HttpPageSource, PageSource};
pub use types::{HarvestReport, StopReason, VoteEntry, VoteStatus};

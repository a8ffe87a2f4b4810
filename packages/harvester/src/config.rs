//! Configuration constants and validation functions for the harvester.

use std::path::PathBuf;
use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;
use reqwest::header::{HeaderName, HeaderValue};

use crate::error::{HarvesterError, Result};

/// Paginated roll-call listing on the House Clerk site.
pub const CLERK_LISTING_URL: &str = "https://clerk.house.gov/Votes/MemberVotes";

/// Base URL for roll-call detail pages.
pub const CLERK_VOTES_URL: &str = "https://clerk.house.gov/Votes";

/// Default CSV output path.
pub const DEFAULT_OUTPUT: &str = "votes.csv";

/// A listing page with fewer records than this counts as short.
pub const DEFAULT_PAGE_SIZE_THRESHOLD: usize = 10;

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Browser-like user agent. The Clerk site rejects obvious bots.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// First year a roll-call vote could have been recorded.
const MIN_YEAR: i32 = 1789;
const MAX_YEAR: i32 = 9999;

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/?#]+[^\s]*$").expect("valid regex"));

/// Settings for one harvest run.
///
/// `Default` reproduces the stock behaviour: the Clerk listing, `votes.csv`,
/// a threshold of 10 and the browser user agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    pub listing_url: String,
    pub votes_base_url: String,
    pub output: PathBuf,
    pub page_size_threshold: usize,
    pub user_agent: String,
    pub extra_headers: Vec<(String, String)>,
    /// Session year used to build detail links. `None` means the current year.
    pub year: Option<i32>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            listing_url: CLERK_LISTING_URL.to_string(),
            votes_base_url: CLERK_VOTES_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            page_size_threshold: DEFAULT_PAGE_SIZE_THRESHOLD,
            user_agent: BROWSER_USER_AGENT.to_string(),
            extra_headers: Vec::new(),
            year: None,
        }
    }
}

impl HarvestConfig {
    pub fn with_listing_url(mut self, url: impl Into<String>) -> Self {
        self.listing_url = url.into();
        self
    }

    pub fn with_votes_base_url(mut self, url: impl Into<String>) -> Self {
        self.votes_base_url = url.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_page_size_threshold(mut self, threshold: usize) -> Self {
        self.page_size_threshold = threshold;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Check every setting before any request is made.
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.listing_url)?;
        validate_url(&self.votes_base_url)?;
        validate_threshold(self.page_size_threshold)?;
        validate_header("User-Agent", &self.user_agent)?;
        for (name, value) in &self.extra_headers {
            validate_header(name, value)?;
        }
        if let Some(year) = self.year {
            validate_year(year)?;
        }
        Ok(())
    }

    /// Year to stamp into detail links.
    pub fn effective_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }

    /// URL of listing page `page` (1-based).
    pub fn page_url(&self, page: u32) -> String {
        page_url(&self.listing_url, page)
    }
}

/// Build the URL of a listing page.
///
/// # Examples
/// ```
/// use rollcall_harvester::config::page_url;
///
/// assert_eq!(
///     page_url("https://clerk.house.gov/Votes/MemberVotes", 2),
///     "https://clerk.house.gov/Votes/MemberVotes/?page=2"
/// );
/// ```
pub fn page_url(listing_url: &str, page: u32) -> String {
    format!("{}/?page={page}", listing_url.trim_end_matches('/'))
}

/// Validate that a URL is absolute http(s).
///
/// # Examples
/// ```
/// use rollcall_harvester::config::validate_url;
///
/// assert!(validate_url("https://clerk.house.gov/Votes").is_ok());
/// assert!(validate_url("clerk.house.gov").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<()> {
    if URL_PATTERN.is_match(url) {
        Ok(())
    } else {
        Err(HarvesterError::InvalidUrl(url.to_string()))
    }
}

/// Validate the page-size threshold. A threshold of zero would never stop.
pub fn validate_threshold(threshold: usize) -> Result<()> {
    if threshold >= 1 {
        Ok(())
    } else {
        Err(HarvesterError::InvalidThreshold(threshold))
    }
}

/// Validate a session year.
pub fn validate_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(HarvesterError::InvalidYear(year))
    }
}

/// Validate a header name/value pair against HTTP syntax.
pub fn validate_header(name: &str, value: &str) -> Result<()> {
    let invalid = || HarvesterError::InvalidHeader(format!("{name}: {value}"));
    HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
    HeaderValue::from_str(value).map_err(|_| invalid())?;
    Ok(())
}

/// Parse a `Name: value` header argument.
///
/// # Examples
/// ```
/// use rollcall_harvester::config::parse_header;
///
/// let (name, value) = parse_header("Accept-Language: en-US").unwrap();
/// assert_eq!(name, "Accept-Language");
/// assert_eq!(value, "en-US");
/// assert!(parse_header("no colon here").is_err());
/// ```
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| HarvesterError::InvalidHeader(raw.to_string()))?;
    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() {
        return Err(HarvesterError::InvalidHeader(raw.to_string()));
    }
    validate_header(name, value)?;
    Ok((name.to_string(), value.to_string()))
}

//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rollcall_harvester::error::{HarvesterError, Result};
use rollcall_harvester::{HarvestConfig, PageSource};

/// Load fixture file content.
pub fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("clerk")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// One well-formed vote block for roll call `roll`.
pub fn vote_block(roll: u32) -> String {
    load_fixture("vote_template.html").replace("{{ROLL}}", &roll.to_string())
}

/// A listing page holding one vote block per roll call number.
pub fn listing_page(rolls: impl IntoIterator<Item = u32>) -> String {
    let votes: String = rolls.into_iter().map(vote_block).collect();
    format!(
        "<!DOCTYPE html><html><head><title>Roll Call Votes</title></head>\
         <body><main class=\"library-list\">{votes}</main></body></html>"
    )
}

/// A listing page past the last vote.
pub fn empty_page() -> String {
    listing_page(std::iter::empty())
}

/// Config pointing at a fake listing with a fixed session year.
pub fn test_config(listing_url: &str) -> HarvestConfig {
    HarvestConfig::default()
        .with_listing_url(listing_url)
        .with_year(2025)
}

/// Serves canned listing pages; anything else fails with status 500.
pub struct FixtureSource {
    pages: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl FixtureSource {
    /// `bodies[i]` is served as page `i + 1` of `config`'s listing.
    pub fn new(config: &HarvestConfig, bodies: Vec<String>) -> Self {
        let pages = bodies
            .into_iter()
            .zip(1u32..)
            .map(|(body, page)| (config.page_url(page), body))
            .collect();
        Self {
            pages,
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl PageSource for FixtureSource {
    fn fetch(&self, url: &str) -> Result<String> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| HarvesterError::HttpStatus {
                url: url.to_string(),
                status: 500,
            })
    }
}

//! HTML utilities and vote-record extraction over `scraper` trees.

mod extract;
mod utils;

pub use extract::{extract_records, parse_page, RawRecord};
pub use utils::{
    find_anchor_with_text, find_labelled_paragraph, flatten_text, get_attribute, nth_anchor,
};

//! Main harvester service that ties all components together.

use crate::config::HarvestConfig;
use crate::error::Result;
use crate::html::{extract_records, parse_page};
use crate::http::{with_page_context, HttpPageSource, PageSource};
use crate::normalize::FieldNormalizer;
use crate::paginator::Paginator;
use crate::types::{Accumulator, HarvestReport, SkippedRecord, StopReason};

/// Harvest every listing page over HTTP.
///
/// Validates the configuration and builds the HTTP client before the first
/// request; after that, fetch failures end the run but are reported in the
/// returned [`HarvestReport`] rather than as an error.
pub fn harvest_votes(config: &HarvestConfig) -> Result<HarvestReport> {
    config.validate()?;
    let source = HttpPageSource::from_config(config)?;
    Ok(harvest(&source, config))
}

/// Run the pipeline against any page source.
pub fn harvest<S: PageSource + ?Sized>(source: &S, config: &HarvestConfig) -> HarvestReport {
    harvest_with_progress(source, config, |_, _| {})
}

/// Run the pipeline, calling `on_page(page, record_count)` after each fetch.
///
/// Pages are processed strictly in order. A page is fetched, parsed and
/// normalized before the next one is requested.
pub fn harvest_with_progress<S, F>(
    source: &S,
    config: &HarvestConfig,
    mut on_page: F,
) -> HarvestReport
where
    S: PageSource + ?Sized,
    F: FnMut(u32, usize),
{
    let normalizer = FieldNormalizer::new(&config.votes_base_url, config.effective_year());
    let mut paginator = Paginator::new(config.page_size_threshold);
    let mut accumulator = Accumulator::new();
    let mut skipped: Vec<SkippedRecord> = Vec::new();
    let mut pages_fetched = 0;

    let stop = loop {
        let page = paginator.next_page();
        let url = config.page_url(page);
        tracing::info!(page, url = %url, "Fetching page");

        let body = match source.fetch(&url) {
            Ok(body) => body,
            Err(e) => {
                let error = with_page_context(page, e);
                tracing::warn!(page, error = %error, "Page fetch failed, stopping");
                break StopReason::TransportFailure { page, error };
            }
        };
        pages_fetched += 1;

        let document = parse_page(&body);
        let records = extract_records(&document);
        tracing::info!(page, records = records.len(), "Found vote records");
        on_page(page, records.len());

        if paginator.record_end_of_data(records.len()) {
            tracing::debug!(
                page,
                threshold = config.page_size_threshold,
                "Second consecutive short page, stopping"
            );
            break StopReason::EndOfData { page };
        }

        for (index, record) in records.into_iter().enumerate() {
            match normalizer.normalize(record) {
                Ok(entry) => accumulator.append(entry),
                Err(reason) => {
                    tracing::warn!(page, index, reason = %reason, "Skipping vote record");
                    skipped.push(SkippedRecord {
                        page,
                        index,
                        reason,
                    });
                }
            }
        }
    };

    tracing::info!(
        votes = accumulator.len(),
        pages = pages_fetched,
        skipped = skipped.len(),
        "Harvest finished"
    );

    HarvestReport {
        entries: accumulator.into_entries(),
        pages_fetched,
        skipped,
        stop,
    }
}

//! HTTP client wrapper for downloading listing pages.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::{HarvestConfig, HTTP_TIMEOUT_SECS};
use crate::error::{HarvesterError, Result};

/// Source of raw listing pages.
///
/// The harvester only needs "fetch this URL as text"; the blocking HTTP
/// client is one implementation, in-memory fixtures are another.
pub trait PageSource {
    /// Fetch a document. Any failure is fatal to the run.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` with the configured user agent, extra
/// headers and a fixed timeout.
pub fn create_client(config: &HarvestConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.extra_headers {
        let invalid = || HarvesterError::InvalidHeader(format!("{name}: {value}"));
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        headers.append(name, value);
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// [`PageSource`] backed by a blocking HTTP client.
///
/// No retries: a non-success status or a transport error is returned as-is.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from configuration and wrap it.
    pub fn from_config(config: &HarvestConfig) -> Result<Self> {
        Ok(Self::new(create_client(config)?))
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(url, status = %status, "Non-success response");
            return Err(HarvesterError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

/// Attach the page number to a bare transport error.
pub(crate) fn with_page_context(page: u32, err: HarvesterError) -> HarvesterError {
    if let HarvesterError::Http(source) = err {
        HarvesterError::PageDownload { page, source }
    } else {
        err
    }
}

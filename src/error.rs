//! Error kinds for a product lookup.

use thiserror::Error;

/// Everything that can end a lookup early.
///
/// Image download failures are reported as an
/// [`ImageOutcome`](crate::amazon::ImageOutcome) and never abort a run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Please enter a valid URL with a domain name.")]
    InvalidUrl,

    #[error("The domain name '{0}' is not valid. Expected an amazon or amzn.to link.")]
    InvalidDomain(String),

    #[error("Failed to extract ASIN from given URL")]
    AsinNotFound,

    #[error("Failed to resolve short link {url}: {reason}")]
    ShortLink { url: String, reason: String },

    #[error("Error occurred while making the request: {0}")]
    Request(String),

    #[error("Request failed with status: {status}")]
    Http { status: u16 },

    #[error("Error occurred while parsing the response from the Scraper API: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Incomplete data received from the Scraper API")]
    IncompleteData,

    #[error("No API key configured. Set SCRAPER_API_KEY (or APIKEY) or pass --api-key.")]
    MissingApiKey,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Informational outcomes are printed without the red `Error:` label.
    pub fn is_informational(&self) -> bool {
        matches!(self, ScrapeError::IncompleteData)
    }
}

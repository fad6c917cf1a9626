//! HTTP client for short-link resolution, the Scraper API and product images.

use crate::amazon::models::{ApiProduct, ProductRequest};
use crate::amazon::regions::Region;
use crate::config::Config;
use crate::error::ScrapeError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use wreq::redirect::Policy;
use wreq::Client;
use wreq_util::Emulation;

/// Maximum redirect hops followed when resolving a short link.
const MAX_REDIRECTS: usize = 10;

/// Network operations a lookup needs - enables mocking for tests.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Follows redirects from `url` and returns the final URL.
    async fn resolve(&self, url: &str) -> Result<String, ScrapeError>;

    /// Queries the structured product endpoint.
    async fn product(&self, request: &ProductRequest) -> Result<ApiProduct, ScrapeError>;

    /// Downloads an image. Anything but `200 OK` is an error.
    async fn image(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}

/// wreq-backed client for the Scraper API.
pub struct ScraperClient {
    client: Client,
    endpoint: String,
    region: Region,
}

impl ScraperClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        // Configure proxy if specified
        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url)
                .map_err(|e| ScrapeError::Request(format!("invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| ScrapeError::Request(e.to_string()))?;

        Ok(Self { client, endpoint: config.endpoint.clone(), region: config.region })
    }

    /// Returns the product endpoint this client queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProductApi for ScraperClient {
    async fn resolve(&self, url: &str) -> Result<String, ScrapeError> {
        info!("Resolving short link: {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept-Language", self.region.accept_language())
            .send()
            .await
            .map_err(|e| ScrapeError::ShortLink { url: url.to_string(), reason: e.to_string() })?;

        let final_url = response.uri().to_string();
        debug!("Short link resolved to {} ({})", final_url, response.status());
        Ok(final_url)
    }

    async fn product(&self, request: &ProductRequest) -> Result<ApiProduct, ScrapeError> {
        let url = format!("{}?{}", self.endpoint, request.query_string());

        info!("Fetching product: {}", request.asin);
        debug!("GET {} {:?}", self.endpoint, request);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ScrapeError::Request(redact(&e.to_string(), &request.api_key)))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(ScrapeError::Http { status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::Request(redact(&e.to_string(), &request.api_key)))?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn image(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        debug!("GET {}", url);

        let response =
            self.client.get(url).send().await.map_err(|e| ScrapeError::Request(e.to_string()))?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(ScrapeError::Http { status: status.as_u16() });
        }

        let bytes = response.bytes().await.map_err(|e| ScrapeError::Request(e.to_string()))?;
        debug!("Downloaded {} image bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

/// Masks the API key in transport error messages, which embed the request URL.
fn redact(message: &str, secret: &str) -> String {
    if secret.is_empty() {
        return message.to_string();
    }
    message.replace(secret, "***").replace(urlencoding::encode(secret).as_ref(), "***")
}

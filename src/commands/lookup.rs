//! Product lookup: URL -> ASIN -> product record -> saved image.

use crate::amazon::{
    classify, extract_asin, Domain, ImageOutcome, LookupOutcome, ProductApi, ProductRecord,
    ProductRequest, ScraperClient,
};
use crate::config::Config;
use crate::error::ScrapeError;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Looks up a single product from its Amazon URL.
pub struct LookupCommand {
    config: Config,
}

impl LookupCommand {
    /// Creates a new lookup command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the full lookup, including the image download.
    pub async fn execute(&self, url: &str) -> Result<LookupOutcome, ScrapeError> {
        self.execute_reporting(url, |_| {}).await
    }

    /// Runs the full lookup, handing the product to `on_record` before the
    /// image download starts.
    pub async fn execute_reporting(
        &self,
        url: &str,
        on_record: impl FnOnce(&ProductRecord),
    ) -> Result<LookupOutcome, ScrapeError> {
        let url = url.trim();
        let domain = classify(url)?;

        // Input errors win over client setup errors
        let client = ScraperClient::new(&self.config)?;
        debug!("Using product endpoint {}", client.endpoint());

        self.run(&client, url, domain, on_record).await
    }

    /// Runs the full lookup with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ProductApi,
        url: &str,
    ) -> Result<LookupOutcome, ScrapeError> {
        self.execute_with_client_reporting(client, url, |_| {}).await
    }

    /// Same as [`execute_reporting`](Self::execute_reporting) with a provided client.
    pub async fn execute_with_client_reporting(
        &self,
        client: &impl ProductApi,
        url: &str,
        on_record: impl FnOnce(&ProductRecord),
    ) -> Result<LookupOutcome, ScrapeError> {
        let url = url.trim();
        let domain = classify(url)?;
        self.run(client, url, domain, on_record).await
    }

    async fn run(
        &self,
        client: &impl ProductApi,
        url: &str,
        domain: Domain,
        on_record: impl FnOnce(&ProductRecord),
    ) -> Result<LookupOutcome, ScrapeError> {
        debug!("Classified {} as {}", url, domain);

        let asin = self.resolve_asin(client, url, domain).await?;
        info!("Looking up product: {}", asin);

        let request = self.build_request(&asin)?;
        let api = client.product(&request).await?;
        let product = ProductRecord::from_api(asin, api)?;
        on_record(&product);

        let image = self.save_image(client, &product.image_url).await;
        Ok(LookupOutcome { product, image })
    }

    /// Extracts the ASIN, following the redirect first for short links.
    pub async fn resolve_asin(
        &self,
        client: &impl ProductApi,
        url: &str,
        domain: Domain,
    ) -> Result<String, ScrapeError> {
        let asin = if domain.needs_resolution() {
            let resolved = client.resolve(url).await?;
            extract_asin(&resolved)
        } else {
            extract_asin(url)
        };

        asin.ok_or(ScrapeError::AsinNotFound)
    }

    /// Builds the Scraper API query for `asin`.
    pub fn build_request(&self, asin: &str) -> Result<ProductRequest, ScrapeError> {
        let api_key = self.config.api_key().ok_or(ScrapeError::MissingApiKey)?;
        Ok(ProductRequest::new(api_key, asin, self.config.region))
    }

    /// Downloads `image_url` to the configured path. Never fails the lookup.
    pub async fn save_image(&self, client: &impl ProductApi, image_url: &str) -> ImageOutcome {
        match self.try_save_image(client, image_url).await {
            Ok(path) => {
                info!("Saved image to {}", path.display());
                ImageOutcome::Saved(path)
            }
            Err(e) => {
                warn!("Image download failed for {}: {}", image_url, e);
                ImageOutcome::Failed(e.to_string())
            }
        }
    }

    async fn try_save_image(
        &self,
        client: &impl ProductApi,
        image_url: &str,
    ) -> Result<PathBuf, ScrapeError> {
        let bytes = client.image(image_url).await?;
        let path = &self.config.image_path;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, &bytes).await?;

        Ok(path.clone())
    }
}

//! Amazon-specific modules: URL handling, the Scraper API client and data models.

pub mod asin;
pub mod client;
pub mod domain;
pub mod models;
pub mod regions;

pub use asin::extract_asin;
pub use client::{ProductApi, ScraperClient};
pub use domain::{classify, Domain};
pub use models::{ApiProduct, ImageOutcome, LookupOutcome, ProductRecord, ProductRequest};
pub use regions::Region;

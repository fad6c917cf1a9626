//! amz-price - look up an Amazon product's name, price and image from its URL
//!
//! Resolves the ASIN from a product or `amzn.to` short link, queries the
//! ScraperAPI structured product endpoint and saves the primary image.

pub mod amazon;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;

pub use amazon::models::{ImageOutcome, LookupOutcome, ProductRecord, ProductRequest};
pub use amazon::regions::Region;
pub use config::Config;
pub use error::ScrapeError;

//! Data models for the Scraper API request and product response.

use crate::amazon::regions::Region;
use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Query parameters for the structured product endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct ProductRequest {
    pub api_key: String,
    pub asin: String,
    pub country: String,
    pub tld: String,
    pub autoparse: bool,
}

impl ProductRequest {
    /// Builds a request for `asin` in the given marketplace.
    pub fn new(api_key: impl Into<String>, asin: impl Into<String>, region: Region) -> Self {
        Self {
            api_key: api_key.into(),
            asin: asin.into(),
            country: region.country(),
            tld: region.tld().to_string(),
            autoparse: true,
        }
    }

    /// Returns the query pairs in the order they are sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", self.api_key.clone()),
            ("asin", self.asin.clone()),
            ("country", self.country.clone()),
            ("tld", self.tld.clone()),
            ("autoparse", self.autoparse.to_string()),
        ]
    }

    /// Returns the percent-encoded query string (without leading `?`).
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// Never print the API key.
impl fmt::Debug for ProductRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductRequest")
            .field("api_key", &"***")
            .field("asin", &self.asin)
            .field("country", &self.country)
            .field("tld", &self.tld)
            .field("autoparse", &self.autoparse)
            .finish()
    }
}

/// Raw product payload as returned by the Scraper API.
///
/// Only the fields this tool uses are modelled; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiProduct {
    #[serde(default)]
    pub name: Option<String>,
    /// Already currency-formatted, e.g. `₹499.00`
    #[serde(default)]
    pub pricing: Option<String>,
    /// Entries may be `null`; only the first one is used
    #[serde(default)]
    pub images: Option<Vec<Option<String>>>,
}

/// A product with every field needed for display and image download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Amazon Standard Identification Number
    pub asin: String,
    /// Product title
    pub name: String,
    /// Price text as formatted by the API
    pub price: String,
    /// Primary product image
    pub image_url: String,
}

impl ProductRecord {
    /// Builds a record, failing with [`ScrapeError::IncompleteData`] if
    /// the name, price or first image is missing or blank.
    pub fn from_api(asin: impl Into<String>, api: ApiProduct) -> Result<Self, ScrapeError> {
        let name = non_blank(api.name);
        let price = non_blank(api.pricing);
        let image_url =
            non_blank(api.images.and_then(|images| images.into_iter().next()).flatten());

        match (name, price, image_url) {
            (Some(name), Some(price), Some(image_url)) => {
                Ok(Self { asin: asin.into(), name, price, image_url })
            }
            _ => Err(ScrapeError::IncompleteData),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// What happened to the product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "detail")]
pub enum ImageOutcome {
    Saved(PathBuf),
    Failed(String),
}

impl ImageOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, ImageOutcome::Saved(_))
    }
}

/// Result of a complete lookup.
#[derive(Debug, Clone, Serialize)]
pub struct LookupOutcome {
    pub product: ProductRecord,
    pub image: ImageOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(name: Option<&str>, pricing: Option<&str>, images: Option<Vec<&str>>) -> ApiProduct {
        ApiProduct {
            name: name.map(String::from),
            pricing: pricing.map(String::from),
            images: images.map(|v| v.into_iter().map(|i| Some(i.to_string())).collect()),
        }
    }

    #[test]
    fn test_request_for_default_region() {
        let request = ProductRequest::new("secret", "B08N5WRWNW", Region::In);
        assert_eq!(
            request.query_pairs(),
            vec![
                ("api_key", "secret".to_string()),
                ("asin", "B08N5WRWNW".to_string()),
                ("country", "in".to_string()),
                ("tld", "in".to_string()),
                ("autoparse", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_string_is_encoded() {
        let request = ProductRequest::new("a b&c", "B08N5WRWNW", Region::Uk);
        assert_eq!(
            request.query_string(),
            "api_key=a%20b%26c&asin=B08N5WRWNW&country=uk&tld=co.uk&autoparse=true"
        );
    }

    #[test]
    fn test_request_debug_hides_api_key() {
        let request = ProductRequest::new("super-secret", "B08N5WRWNW", Region::In);
        let debug = format!("{:?}", request);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("B08N5WRWNW"));
    }

    #[test]
    fn test_api_product_parsing() {
        let json = r#"{"name": "Widget", "pricing": "₹499", "images": ["https://img/x.jpg"], "brand": "Acme"}"#;
        let parsed: ApiProduct = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Widget"));
        assert_eq!(parsed.pricing.as_deref(), Some("₹499"));
        assert_eq!(parsed.images.unwrap(), vec![Some("https://img/x.jpg".to_string())]);

        let empty: ApiProduct = serde_json::from_str("{}").unwrap();
        assert!(empty.name.is_none());
        assert!(empty.images.is_none());

        let nulls: ApiProduct =
            serde_json::from_str(r#"{"name": null, "pricing": null, "images": null}"#).unwrap();
        assert!(nulls.pricing.is_none());
    }

    #[test]
    fn test_record_complete() {
        let record =
            ProductRecord::from_api("B08N5WRWNW", api(Some("Widget"), Some("₹499"), Some(vec!["https://img/x.jpg", "https://img/y.jpg"])))
                .unwrap();
        assert_eq!(record.asin, "B08N5WRWNW");
        assert_eq!(record.name, "Widget");
        assert_eq!(record.price, "₹499");
        assert_eq!(record.image_url, "https://img/x.jpg");
    }

    #[test]
    fn test_record_incomplete() {
        let cases = [
            api(None, Some("₹499"), Some(vec!["https://img/x.jpg"])),
            api(Some("Widget"), None, Some(vec!["https://img/x.jpg"])),
            api(Some("Widget"), Some("₹499"), None),
            api(Some("Widget"), Some("₹499"), Some(vec![])),
            api(Some("  "), Some("₹499"), Some(vec!["https://img/x.jpg"])),
            api(Some("Widget"), Some(""), Some(vec!["https://img/x.jpg"])),
            api(Some("Widget"), Some("₹499"), Some(vec![""])),
        ];

        for case in cases {
            let err = ProductRecord::from_api("B08N5WRWNW", case).unwrap_err();
            assert!(matches!(err, ScrapeError::IncompleteData));
        }
    }

    #[test]
    fn test_null_first_image_is_incomplete() {
        for json in [
            r#"{"name": "Widget", "pricing": "₹499", "images": [null]}"#,
            r#"{"name": "Widget", "pricing": "₹499", "images": [null, "https://img/y.jpg"]}"#,
        ] {
            let parsed: ApiProduct = serde_json::from_str(json).unwrap();
            let err = ProductRecord::from_api("B08N5WRWNW", parsed).unwrap_err();
            assert!(matches!(err, ScrapeError::IncompleteData), "{}", json);
        }
    }

    #[test]
    fn test_image_outcome_serde() {
        let json = serde_json::to_string(&ImageOutcome::Failed("404".into())).unwrap();
        assert_eq!(json, r#"{"status":"failed","detail":"404"}"#);
        assert!(ImageOutcome::Saved(PathBuf::from("a.jpg")).is_saved());
    }
}

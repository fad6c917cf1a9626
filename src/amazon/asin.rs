//! ASIN extraction from product URLs.

use regex_lite::Regex;
use std::sync::LazyLock;

/// A 10-character uppercase ASIN path segment, followed by `/`, `?` or the end.
static ASIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([A-Z0-9]{10})(?:[/?]|$)").unwrap());

/// Returns the first ASIN found in `url`, or `None`.
///
/// A missing ASIN is not an error here; the caller decides what it means.
pub fn extract_asin(url: &str) -> Option<String> {
    ASIN_PATTERN.captures(url).and_then(|caps| caps.get(1)).map(|m| m.as_str().to_string())
}

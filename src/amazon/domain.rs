//! Classifies a product URL as a direct Amazon link or an amzn.to short link.

use crate::error::ScrapeError;
use std::fmt;

/// Second-level labels that sit between a registrable name and the TLD
/// (`amazon.co.uk`, `amazon.com.au`).
const GENERIC_SECOND_LEVEL: &[&str] = &["co", "com"];

/// Which of the known Amazon hosts a URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// A regular storefront URL, e.g. `www.amazon.in/.../dp/ASIN`.
    Amazon,
    /// A redirecting short link, e.g. `amzn.to/abc123`.
    ShortLink,
}

impl Domain {
    /// Returns the host label that identifies this domain.
    pub fn tag(&self) -> &'static str {
        match self {
            Domain::Amazon => "amazon",
            Domain::ShortLink => "amzn",
        }
    }

    /// Whether the URL must be resolved over HTTP before extracting an ASIN.
    pub fn needs_resolution(&self) -> bool {
        matches!(self, Domain::ShortLink)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Classifies `url` by the registrable label of its host.
///
/// The host is taken positionally (`scheme://host/...`), not with a full URL
/// parser. Userinfo and port are ignored and comparison is case-insensitive.
pub fn classify(url: &str) -> Result<Domain, ScrapeError> {
    let host = host_segment(url.trim()).ok_or(ScrapeError::InvalidUrl)?;
    let label = registrable_label(&host).ok_or(ScrapeError::InvalidUrl)?;

    match label {
        "amazon" => Ok(Domain::Amazon),
        "amzn" => Ok(Domain::ShortLink),
        other => Err(ScrapeError::InvalidDomain(other.to_string())),
    }
}

/// Returns the lowercased hostname at the third `/`-separated segment.
fn host_segment(url: &str) -> Option<String> {
    let authority = url.split('/').nth(2)?;
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);
    Some(host.to_ascii_lowercase())
}

/// Picks the label left of the public suffix, skipping a generic `co`/`com`.
fn registrable_label(host: &str) -> Option<&str> {
    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() < 2 {
        return None;
    }

    let second = labels[labels.len() - 2];
    if labels.len() >= 3 && GENERIC_SECOND_LEVEL.contains(&second) {
        return Some(labels[labels.len() - 3]);
    }

    Some(second)
}

//! Amazon marketplaces and the country/TLD codes the Scraper API expects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported Amazon marketplaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Uk,
    De,
    Fr,
    Es,
    It,
    Ca,
    Au,
    Jp,
    #[default]
    In,
    Br,
    Mx,
    Nl,
    Se,
    Pl,
}

impl Region {
    /// Returns the Amazon domain for this region.
    pub fn domain(&self) -> &'static str {
        match self {
            Region::Us => "amazon.com",
            Region::Uk => "amazon.co.uk",
            Region::De => "amazon.de",
            Region::Fr => "amazon.fr",
            Region::Es => "amazon.es",
            Region::It => "amazon.it",
            Region::Ca => "amazon.ca",
            Region::Au => "amazon.com.au",
            Region::Jp => "amazon.co.jp",
            Region::In => "amazon.in",
            Region::Br => "amazon.com.br",
            Region::Mx => "amazon.com.mx",
            Region::Nl => "amazon.nl",
            Region::Se => "amazon.se",
            Region::Pl => "amazon.pl",
        }
    }

    /// Returns the marketplace TLD (`tld` query parameter), e.g. `co.uk`.
    pub fn tld(&self) -> &'static str {
        self.domain().trim_start_matches("amazon.")
    }

    /// Returns the geotargeting country code (`country` query parameter).
    pub fn country(&self) -> String {
        self.to_string()
    }

    /// Returns the currency code for this region.
    pub fn currency(&self) -> &'static str {
        match self {
            Region::Us => "USD",
            Region::Uk => "GBP",
            Region::De | Region::Fr | Region::Es | Region::It | Region::Nl => "EUR",
            Region::Ca => "CAD",
            Region::Au => "AUD",
            Region::Jp => "JPY",
            Region::In => "INR",
            Region::Br => "BRL",
            Region::Mx => "MXN",
            Region::Se => "SEK",
            Region::Pl => "PLN",
        }
    }

    /// Returns the Accept-Language header value for this region.
    pub fn accept_language(&self) -> &'static str {
        match self {
            Region::Us | Region::Ca | Region::Au => "en-US,en;q=0.9",
            Region::Uk => "en-GB,en;q=0.9",
            Region::De => "de-DE,de;q=0.9,en;q=0.8",
            Region::Fr => "fr-FR,fr;q=0.9,en;q=0.8",
            Region::Es | Region::Mx => "es-ES,es;q=0.9,en;q=0.8",
            Region::It => "it-IT,it;q=0.9,en;q=0.8",
            Region::Jp => "ja-JP,ja;q=0.9,en;q=0.8",
            Region::In => "en-IN,en;q=0.9,hi;q=0.8",
            Region::Br => "pt-BR,pt;q=0.9,en;q=0.8",
            Region::Nl => "nl-NL,nl;q=0.9,en;q=0.8",
            Region::Se => "sv-SE,sv;q=0.9,en;q=0.8",
            Region::Pl => "pl-PL,pl;q=0.9,en;q=0.8",
        }
    }

    /// Returns all supported regions.
    pub fn all() -> &'static [Region] {
        &[
            Region::Us,
            Region::Uk,
            Region::De,
            Region::Fr,
            Region::Es,
            Region::It,
            Region::Ca,
            Region::Au,
            Region::Jp,
            Region::In,
            Region::Br,
            Region::Mx,
            Region::Nl,
            Region::Se,
            Region::Pl,
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Region::Us => "us",
            Region::Uk => "uk",
            Region::De => "de",
            Region::Fr => "fr",
            Region::Es => "es",
            Region::It => "it",
            Region::Ca => "ca",
            Region::Au => "au",
            Region::Jp => "jp",
            Region::In => "in",
            Region::Br => "br",
            Region::Mx => "mx",
            Region::Nl => "nl",
            Region::Se => "se",
            Region::Pl => "pl",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "us" | "usa" | "united states" => Ok(Region::Us),
            "uk" | "gb" | "united kingdom" => Ok(Region::Uk),
            "de" | "germany" => Ok(Region::De),
            "fr" | "france" => Ok(Region::Fr),
            "es" | "spain" => Ok(Region::Es),
            "it" | "italy" => Ok(Region::It),
            "ca" | "canada" => Ok(Region::Ca),
            "au" | "australia" => Ok(Region::Au),
            "jp" | "japan" => Ok(Region::Jp),
            "in" | "india" => Ok(Region::In),
            "br" | "brazil" => Ok(Region::Br),
            "mx" | "mexico" => Ok(Region::Mx),
            "nl" | "netherlands" => Ok(Region::Nl),
            "se" | "sweden" => Ok(Region::Se),
            "pl" | "poland" => Ok(Region::Pl),
            _ => Err(RegionParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegionParseError(String);

impl fmt::Display for RegionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown region '{}'. Valid regions: us, uk, de, fr, es, it, ca, au, jp, in, br, mx, nl, se, pl",
            self.0
        )
    }
}

impl std::error::Error for RegionParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parsing() {
        assert_eq!(Region::from_str("in").unwrap(), Region::In);
        assert_eq!(Region::from_str("India").unwrap(), Region::In);
        assert_eq!(Region::from_str("gb").unwrap(), Region::Uk);
        assert_eq!(Region::from_str("united states").unwrap(), Region::Us);
        assert_eq!(Region::from_str("GERMANY").unwrap(), Region::De);

        assert!(Region::from_str("invalid").is_err());
        assert!(Region::from_str("").is_err());
    }

    #[test]
    fn test_default_is_india() {
        let region = Region::default();
        assert_eq!(region, Region::In);
        assert_eq!(region.country(), "in");
        assert_eq!(region.tld(), "in");
    }

    #[test]
    fn test_tld_codes() {
        assert_eq!(Region::Us.tld(), "com");
        assert_eq!(Region::Uk.tld(), "co.uk");
        assert_eq!(Region::Au.tld(), "com.au");
        assert_eq!(Region::Jp.tld(), "co.jp");
        assert_eq!(Region::Br.tld(), "com.br");
        assert_eq!(Region::De.tld(), "de");
    }

    #[test]
    fn test_country_codes() {
        assert_eq!(Region::Us.country(), "us");
        assert_eq!(Region::Uk.country(), "uk");
        assert_eq!(Region::Mx.country(), "mx");
    }

    #[test]
    fn test_every_region_round_trips_through_its_code() {
        for region in Region::all() {
            assert_eq!(Region::from_str(&region.to_string()).unwrap(), *region);
            assert!(region.domain().starts_with("amazon."));
        }
        assert_eq!(Region::all().len(), 15);
    }

    #[test]
    fn test_currency_and_language() {
        assert_eq!(Region::In.currency(), "INR");
        assert_eq!(Region::Fr.currency(), "EUR");
        assert!(Region::In.accept_language().contains("en-IN"));
        assert!(Region::Jp.accept_language().contains("ja-JP"));
    }

    #[test]
    fn test_region_parse_error_display() {
        let msg = Region::from_str("xyz").unwrap_err().to_string();
        assert!(msg.contains("xyz"));
        assert!(msg.contains("Valid regions"));
    }

    #[test]
    fn test_region_serde() {
        assert_eq!(serde_json::to_string(&Region::In).unwrap(), "\"in\"");
        let parsed: Region = serde_json::from_str("\"uk\"").unwrap();
        assert_eq!(parsed, Region::Uk);
    }
}

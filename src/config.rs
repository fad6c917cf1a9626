//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::amazon::regions::Region;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Structured Amazon product endpoint of ScraperAPI.
pub const DEFAULT_ENDPOINT: &str = "https://api.scraperapi.com/structured/amazon/product";

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Scraper API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Product data endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Amazon marketplace used for the `country` and `tld` parameters
    #[serde(default)]
    pub region: Region,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Where the product image is written (overwritten on every run)
    #[serde(default = "default_image_path")]
    pub image_path: PathBuf,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_image_path() -> PathBuf {
    PathBuf::from("static/images/Amazon/image.jpg")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            region: Region::In,
            proxy: None,
            timeout_secs: default_timeout_secs(),
            image_path: default_image_path(),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("amz-price").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    ///
    /// `APIKEY` is honoured as a fallback for `SCRAPER_API_KEY`.
    pub fn with_env(mut self) -> Self {
        if let Some(key) = env_non_empty("SCRAPER_API_KEY").or_else(|| env_non_empty("APIKEY")) {
            self.api_key = Some(key);
        }

        if let Some(endpoint) = env_non_empty("AMZ_ENDPOINT") {
            self.endpoint = endpoint;
        }

        if let Ok(region) = std::env::var("AMZ_REGION") {
            if let Ok(r) = region.parse() {
                self.region = r;
            }
        }

        if let Some(proxy) = env_non_empty("AMZ_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(timeout) = std::env::var("AMZ_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        if let Some(path) = env_non_empty("AMZ_IMAGE_PATH") {
            self.image_path = PathBuf::from(path);
        }

        self
    }

    /// Returns the API key if one is configured and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

//! amz-price - look up an Amazon product's name, price and image from its URL

use amz_price::amazon::regions::Region;
use amz_price::commands::LookupCommand;
use amz_price::config::{Config, OutputFormat};
use amz_price::error::ScrapeError;
use amz_price::format::{self, Formatter};
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-price",
    version,
    about = "Look up an Amazon product's name, price and image from its URL",
    long_about = "Resolves the ASIN from an Amazon product URL or amzn.to short link, \
                  queries the ScraperAPI structured product endpoint and saves the product image."
)]
struct Cli {
    /// Scraper API key
    #[arg(long, global = true, env = "SCRAPER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Amazon marketplace for the country/tld parameters
    #[arg(short, long, global = true)]
    region: Option<Region>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "AMZ_PROXY")]
    proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Where to write the product image
    #[arg(long, global = true)]
    image_path: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a product by URL (prompts when no URL is given)
    #[command(alias = "l")]
    Lookup {
        /// Amazon product URL or amzn.to short link
        url: Option<String>,
    },

    /// List supported regions
    Regions,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(api_key) = cli.api_key {
        config.api_key = Some(api_key);
    }
    if let Some(region) = cli.region {
        config.region = region;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(image_path) = cli.image_path {
        config.image_path = image_path;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command.unwrap_or(Commands::Lookup { url: None }) {
        Commands::Lookup { url } => {
            let url = match url {
                Some(url) => url,
                None => read_url()?,
            };
            run_lookup(config, &url).await;
        }

        Commands::Regions => {
            print!("{}", Formatter::new(OutputFormat::Text).format_regions(Region::all()));
        }
    }

    Ok(())
}

/// Prompts for a URL and reads one line from stdin.
fn read_url() -> Result<String> {
    print!("{}", format::prompt());
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("Failed to read URL from stdin")?;
    Ok(line.trim().to_string())
}

/// Runs a lookup bracketed by timestamps. Lookup failures are printed, never returned.
async fn run_lookup(config: Config, url: &str) {
    let formatter = Formatter::new(config.format);
    let cmd = LookupCommand::new(config);

    formatter.status(&format::timestamp(&Local::now()));

    if let Err(e) = lookup(&cmd, &formatter, url).await {
        debug!("Lookup ended early: {:?}", e);
        formatter.status(&formatter.format_error(&e));
    }

    formatter.status(&format::timestamp(&Local::now()));
}

async fn lookup(cmd: &LookupCommand, formatter: &Formatter, url: &str) -> Result<(), ScrapeError> {
    // JSON output is a single document, so wait for the image before printing.
    if formatter.is_json() {
        let outcome = cmd.execute(url).await?;
        println!("{}", formatter.format_outcome(&outcome));
        return Ok(());
    }

    let outcome = cmd
        .execute_reporting(url, |product| println!("{}", formatter.format_record(product)))
        .await?;
    formatter.status(&formatter.format_image(&outcome.image));
    Ok(())
}

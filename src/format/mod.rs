//! Console output for lookups (colored text or JSON).

use crate::amazon::{ImageOutcome, LookupOutcome, ProductRecord, Region};
use crate::config::OutputFormat;
use crate::error::ScrapeError;
use chrono::{DateTime, TimeZone};
use colored::Colorize;

/// Prompt shown when no URL is given on the command line.
pub const PROMPT: &str = "\nEnter the URL of the product to track its price: ";

/// Formats lookup results and status lines.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns true when stdout is reserved for a JSON document.
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Formats the name and price of a product.
    pub fn format_record(&self, record: &ProductRecord) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Text => format!(
                "\n{}{}\n{}{}\n",
                "Product Name: ".yellow(),
                record.name.cyan(),
                "Product Price: ".yellow(),
                record.price.cyan()
            ),
        }
    }

    /// Formats a finished lookup, image outcome included.
    pub fn format_outcome(&self, outcome: &LookupOutcome) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Text => format!(
                "{}\n{}",
                self.format_record(&outcome.product),
                self.format_image(&outcome.image)
            ),
        }
    }

    /// Formats the result of the image download.
    pub fn format_image(&self, outcome: &ImageOutcome) -> String {
        match outcome {
            ImageOutcome::Saved(path) => {
                format!("{}{}", "Image saved to: ".yellow(), path.display())
            }
            ImageOutcome::Failed(reason) => {
                format!("Failed to fetch image: {}", reason)
            }
        }
    }

    /// Formats a lookup error. Informational outcomes get no `Error:` label.
    pub fn format_error(&self, err: &ScrapeError) -> String {
        if err.is_informational() {
            err.to_string()
        } else {
            format!("{}{}", "Error: ".red(), err)
        }
    }

    /// Formats the table of supported regions.
    pub fn format_regions(&self, regions: &[Region]) -> String {
        let mut output = String::from("Supported Amazon regions:\n\n");
        output.push_str(&format!("{:<6} {:<20} {:<10}\n", "Code", "Domain", "Currency"));
        output.push_str(&format!("{:-<6} {:-<20} {:-<10}\n", "", "", ""));

        for region in regions {
            output.push_str(&format!(
                "{:<6} {:<20} {:<10}\n",
                region.to_string(),
                region.domain(),
                region.currency()
            ));
        }

        output
    }

    /// Prints a status line: stdout for text, stderr when stdout carries JSON.
    pub fn status(&self, line: &str) {
        if self.is_json() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Formats the wall-clock time as `HH:MM:SS` in the locale's preferred form.
pub fn timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%X").to_string()
}

/// Returns the colored input prompt.
pub fn prompt() -> String {
    PROMPT.yellow().to_string()
}

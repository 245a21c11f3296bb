// cli.rs
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_SEARCH_URL: &str =
    "https://www.immoweb.be/en/search/house/for-sale?countries=BE&orderBy=relevance";

/// Crawl a property portal's search results into a flat CSV dataset.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Base search URL; the page number is appended as a query parameter
    #[arg(long, default_value = DEFAULT_SEARCH_URL)]
    pub search_url: String,

    /// Upper bound on search pages (collection stops early on an empty page)
    #[arg(long, default_value_t = 333)]
    pub max_pages: usize,

    /// Path of the output CSV file
    #[arg(short, long, default_value = "houses_for_sale.csv")]
    pub output: PathBuf,

    /// Number of detail-fetch worker threads
    #[arg(short, long, default_value_t = 8)]
    pub workers: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Attempts for a rate-limited (HTTP 429) detail fetch
    #[arg(long, default_value_t = 5)]
    pub max_retries: u64,

    /// Optional path for the JSON crawl summary
    #[arg(long)]
    pub report: Option<PathBuf>,
}

use crate::cli::Args;
use crate::crawl::crawl_listings;
use crate::dataset::export_csv;
use crate::report::{write_report_json, CrawlReport};
use crate::scraper::{ImmoScraper, ScraperConfig};
use clap::Parser;
use std::time::{Duration, Instant};

mod cli;
mod crawl;
mod dataset;
mod errors;
mod normalize;
mod report;
mod scraper;

#[cfg(test)]
mod tests;

fn main() {
    let args = Args::parse();
    let start = Instant::now();

    let config = ScraperConfig {
        timeout: Duration::from_secs(args.timeout),
        max_retries: args.max_retries,
        ..ScraperConfig::default()
    };

    let scraper = match ImmoScraper::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Scraper init failed: {e}");
            std::process::exit(1);
        }
    };

    let mut report = CrawlReport::started_now();

    let collection = scraper.collect_listing_urls(&args.search_url, args.max_pages);
    report.pages_fetched = collection.pages_fetched;
    println!(
        "Recorded {} urls in {:.2?}",
        collection.refs.len(),
        start.elapsed()
    );

    let dataset = crawl_listings(&scraper, collection.refs, args.workers, &mut report);
    report.finish();
    println!("Scraped all data in {:.2?}", start.elapsed());

    if dataset.is_empty() {
        eprintln!("⚠️ No records survived the crawl");
    }

    if let Err(e) = export_csv(&dataset, &args.output) {
        eprintln!("❌ CSV export failed: {e}");
        std::process::exit(1);
    }
    println!(
        "✅ Saved dataset of {} rows ({} columns) to {} in {:.2?}",
        dataset.len(),
        dataset.columns().len(),
        args.output.display(),
        start.elapsed()
    );

    if let Some(path) = &args.report {
        if let Err(e) = write_report_json(&report, path) {
            eprintln!("⚠️ Report write failed: {e}");
        }
    }

    eprintln!("{report}");
}

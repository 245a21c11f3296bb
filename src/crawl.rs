// crawl.rs
use crate::dataset::Dataset;
use crate::normalize::{normalize, Normalized, NormalizedRecord};
use crate::report::CrawlReport;
use crate::scraper::{ImmoScraper, ListingRef, ScraperError};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

/// Explicit per-listing result. Nothing is silently swallowed; every listing
/// lands in exactly one bucket of the crawl report.
#[derive(Debug)]
pub enum ListingOutcome {
    Record(NormalizedRecord),
    GroupListing,
    Failed(ScraperError),
}

/// The whole per-listing pipeline: fetch, extract, normalize.
pub fn process_listing(scraper: &ImmoScraper, listing: &ListingRef) -> ListingOutcome {
    match scraper.fetch_listing(&listing.url) {
        Ok(classified) => match normalize(&classified) {
            Normalized::Record(record) => ListingOutcome::Record(record),
            Normalized::GroupListing => ListingOutcome::GroupListing,
        },
        Err(e) => ListingOutcome::Failed(e),
    }
}

/// Fans the detail-page work out over `workers` threads and folds the
/// outcomes into a dataset on the calling thread. Listings are independent,
/// and row order across them carries no meaning, so outcomes land in
/// completion order.
pub fn crawl_listings(
    scraper: &ImmoScraper,
    refs: Vec<ListingRef>,
    workers: usize,
    report: &mut CrawlReport,
) -> Dataset {
    report.urls_found = refs.len();

    let workers = workers.max(1);
    eprintln!("🧵 Crawling {} listings on {workers} workers", refs.len());

    let (job_tx, job_rx) = mpsc::channel::<ListingRef>();
    let job_rx = Arc::new(Mutex::new(job_rx));
    let (out_tx, out_rx) = mpsc::channel::<(String, ListingOutcome)>();

    for listing in refs {
        // Receiver stays alive until the scope ends.
        let _ = job_tx.send(listing);
    }
    drop(job_tx);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = Arc::clone(&job_rx);
            let out_tx = out_tx.clone();

            scope.spawn(move || loop {
                let job = {
                    let guard = match job_rx.lock() {
                        Ok(guard) => guard,
                        Err(_) => break,
                    };
                    guard.recv()
                };

                let listing = match job {
                    Ok(listing) => listing,
                    Err(_) => break, // queue drained
                };

                let outcome = process_listing(scraper, &listing);
                if out_tx.send((listing.url, outcome)).is_err() {
                    break;
                }
            });
        }
        drop(out_tx);

        let mut dataset = Dataset::new();
        for (url, outcome) in out_rx.iter() {
            match outcome {
                ListingOutcome::Record(record) => {
                    report.records += 1;
                    dataset.push(record);
                }
                ListingOutcome::GroupListing => {
                    report.group_listings += 1;
                }
                ListingOutcome::Failed(e) => {
                    report.record_failure(&e);
                    eprintln!("⚠️ {url}: {e}");
                }
            }
        }
        dataset
    })
}

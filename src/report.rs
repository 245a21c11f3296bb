// report.rs
use crate::errors::ExportError;
use crate::scraper::ScraperError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Aggregate accounting for one crawl run. Every listing lands in exactly
/// one of the outcome buckets.
#[derive(Debug, Serialize)]
pub struct CrawlReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    pub pages_fetched: usize,
    pub urls_found: usize,

    pub records: usize,
    pub group_listings: usize,
    pub rate_limited: usize,
    pub fetch_failures: usize,
    pub extraction_failures: usize,
}

impl CrawlReport {
    pub fn started_now() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_fetched: 0,
            urls_found: 0,
            records: 0,
            group_listings: 0,
            rate_limited: 0,
            fetch_failures: 0,
            extraction_failures: 0,
        }
    }

    pub fn record_failure(&mut self, err: &ScraperError) {
        match err {
            ScraperError::RateLimited(_) => self.rate_limited += 1,
            ScraperError::Network(_) | ScraperError::HttpStatus(_) => self.fetch_failures += 1,
            ScraperError::HtmlParse(_)
            | ScraperError::MissingDataLayer
            | ScraperError::JsonParse(_)
            | ScraperError::UnexpectedShape(_) => self.extraction_failures += 1,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Listings that produced no output row, for whatever reason.
    pub fn excluded(&self) -> usize {
        self.group_listings + self.rate_limited + self.fetch_failures + self.extraction_failures
    }
}

impl fmt::Display for CrawlReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Crawl summary:")?;
        writeln!(f, "  pages fetched:       {}", self.pages_fetched)?;
        writeln!(f, "  urls found:          {}", self.urls_found)?;
        writeln!(f, "  records:             {}", self.records)?;
        writeln!(f, "  group listings:      {}", self.group_listings)?;
        writeln!(f, "  rate limited:        {}", self.rate_limited)?;
        writeln!(f, "  fetch failures:      {}", self.fetch_failures)?;
        writeln!(f, "  extraction failures: {}", self.extraction_failures)?;
        write!(f, "  excluded total:      {}", self.excluded())
    }
}

/// Dumps the run summary as pretty JSON for downstream tooling.
pub fn write_report_json(report: &CrawlReport, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::Io(e.to_string()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report).map_err(|e| ExportError::Io(e.to_string()))?;
    Ok(())
}

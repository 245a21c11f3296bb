// scraper.rs
use crate::scraper::extract::{extract_classified, extract_listing_links};
use crate::scraper::models::{LinkCollection, ListingRef};
use crate::scraper::ScraperError;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Knobs the CLI exposes. Defaults mirror the flag defaults.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub timeout: Duration,
    /// Attempts for a rate-limited detail fetch before giving up.
    pub max_retries: u64,
    pub max_backoff_secs: u64,
    pub jitter_max_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 5,
            max_backoff_secs: 10,
            jitter_max_secs: 2,
        }
    }
}

pub struct ImmoScraper {
    client: Client,
    config: ScraperConfig,
}

impl ImmoScraper {
    pub fn new(config: ScraperConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Walks the paginated search results, harvesting detail-page links.
    ///
    /// Stops at `max_pages`, at the first successfully fetched page with no
    /// result links (the portal has run out of pages), or after three
    /// consecutive page failures.
    pub fn collect_listing_urls(&self, search_url: &str, max_pages: usize) -> LinkCollection {
        let mut refs = Vec::new();
        let mut pages_fetched = 0;
        let mut consecutive_failures = 0;

        for page in 1..=max_pages {
            let page_url = search_page_url(search_url, page);
            eprintln!("📄 Collecting page {page}: {page_url}");

            let links = self
                .fetch_html(&page_url)
                .and_then(|html| extract_listing_links(&html, &page_url));

            match links {
                Ok(links) => {
                    pages_fetched += 1;
                    consecutive_failures = 0;

                    if links.is_empty() {
                        eprintln!("🏁 No result links on page {page}, stopping");
                        break;
                    }

                    eprintln!("✅ Page {page} yielded {} links", links.len());
                    refs.extend(links.into_iter().map(ListingRef::new));
                }

                Err(e) => {
                    consecutive_failures += 1;
                    eprintln!("⚠️ Page {page} failed (attempt {consecutive_failures}): {e}");

                    if consecutive_failures >= 3 {
                        eprintln!("❌ Too many failures, ending collection");
                        break;
                    }
                }
            }
        }

        LinkCollection {
            refs,
            pages_fetched,
        }
    }

    /// Fetches one detail page and pulls its `classified` document out.
    ///
    /// HTTP 429 is retried with capped backoff + jitter; any other failure
    /// surfaces on the first attempt.
    pub fn fetch_listing(&self, url: &str) -> Result<Map<String, Value>, ScraperError> {
        let mut last_err = None;

        for attempt in 1..=self.config.max_retries {
            match self.fetch_html(url) {
                Ok(html) => return extract_classified(&html),
                Err(ScraperError::RateLimited(msg)) => {
                    eprintln!("⚠️ 429 on attempt {attempt} for {url}");
                    last_err = Some(ScraperError::RateLimited(msg));

                    let base = std::cmp::min(2 * attempt, self.config.max_backoff_secs);
                    let jitter = rand::thread_rng().gen_range(0..=self.config.jitter_max_secs);
                    std::thread::sleep(Duration::from_secs(base + jitter));
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err.unwrap_or_else(|| ScraperError::RateLimited("no attempts made".into())))
    }

    fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ScraperError::RateLimited(format!("429 from {url}")));
        }
        if status != StatusCode::OK {
            return Err(ScraperError::HttpStatus(status.as_u16()));
        }

        resp.text()
            .map_err(|e| ScraperError::Network(e.to_string()))
    }
}

/// Appends the page number as a query parameter.
fn search_page_url(search_url: &str, page: usize) -> String {
    if search_url.contains('?') {
        format!("{search_url}&page={page}")
    } else {
        format!("{search_url}?page={page}")
    }
}

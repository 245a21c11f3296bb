mod extract;
mod models;
mod scraper;
mod scraper_error;

pub use extract::{extract_classified, extract_listing_links};
pub use models::{LinkCollection, ListingRef};
pub use scraper::{ImmoScraper, ScraperConfig};
pub use scraper_error::ScraperError;

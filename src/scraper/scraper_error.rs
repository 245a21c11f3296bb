use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScraperError {
    Network(String),
    RateLimited(String),
    HttpStatus(u16),
    HtmlParse(String),
    MissingDataLayer,
    JsonParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Network(msg) => write!(f, "Network error: {msg}"),
            ScraperError::RateLimited(msg) => write!(f, "Rate limited: {msg}"),
            ScraperError::HttpStatus(code) => write!(f, "Unexpected status code: {code}"),
            ScraperError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            ScraperError::MissingDataLayer => write!(f, "window.dataLayer not found"),
            ScraperError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            ScraperError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for ScraperError {}

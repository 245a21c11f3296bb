// extract.rs
//
// Pure HTML/JSON extraction, shared by the crawl loop and the tests.
use crate::scraper::ScraperError;
use scraper::{Html, Selector};
use serde_json::{Map, Value};
use url::Url;

/// CSS class the portal puts on every detail-page link in search results.
const DETAIL_LINK_SELECTOR: &str = "a.card__title-link";

/// Pulls every detail-page link out of a rendered search page, resolved
/// against the page URL so relative hrefs come out absolute.
pub fn extract_listing_links(html: &str, page_url: &str) -> Result<Vec<String>, ScraperError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(DETAIL_LINK_SELECTOR)
        .map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

    let base = Url::parse(page_url).map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

    let mut links = Vec::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            match base.join(href) {
                Ok(url) => links.push(url.to_string()),
                Err(e) => eprintln!("⚠️ Skipping unparseable href {href}: {e}"),
            }
        }
    }
    Ok(links)
}

/// Digs the `classified` object out of a detail page.
///
/// The portal embeds one `window.dataLayer = [ {...} ];` statement in the
/// first script element of the page; the JSON object between the brackets
/// carries a `classified` field with the listing's attributes.
pub fn extract_classified(html: &str) -> Result<Map<String, Value>, ScraperError> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("script").map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

    let element = document
        .select(&selector)
        .next()
        .ok_or(ScraperError::MissingDataLayer)?;

    let script: String = element.text().collect();
    let body = strip_data_layer_wrapper(&script).ok_or(ScraperError::MissingDataLayer)?;

    let data: Value =
        serde_json::from_str(body).map_err(|e| ScraperError::JsonParse(e.to_string()))?;

    match data.get("classified") {
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(ScraperError::UnexpectedShape(
            "classified is not an object".to_string(),
        )),
        None => Err(ScraperError::UnexpectedShape(
            "classified missing".to_string(),
        )),
    }
}

/// Strips the fixed JS statement wrapper, tolerating whitespace on both
/// sides, and returns the JSON text between the brackets.
fn strip_data_layer_wrapper(script: &str) -> Option<&str> {
    let body = script.trim();
    let body = body.strip_prefix("window.dataLayer")?.trim_start();
    let body = body.strip_prefix('=')?.trim_start();
    let body = body.strip_prefix('[')?;
    let body = body.trim_end().strip_suffix("];")?;
    Some(body.trim())
}

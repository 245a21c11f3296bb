/// One detail-page link harvested from a search-results page.
#[derive(Debug, Clone)]
pub struct ListingRef {
    pub url: String,
}

impl ListingRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// What the link collector came back with.
pub struct LinkCollection {
    pub refs: Vec<ListingRef>,
    pub pages_fetched: usize,
}

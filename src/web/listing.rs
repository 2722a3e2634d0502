use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;
use url::Url;

const SEARCH_URL: &str = "https://www.google.com/search";

/// Only the head of the rendered page is inspected; the listing panel sits
/// near the top and the tail is mostly unrelated results.
const TEXT_WINDOW: usize = 3000;

/// Basic listing data scraped from a search results page. Each field is
/// independently best-effort: None means "could not tell", never an error.
/// Matches are heuristic and can latch onto unrelated numbers elsewhere in
/// the window; callers treat them as suggestions, not facts.
#[derive(Debug, Clone, Default)]
pub struct ListingSnapshot {
    pub rating: Option<String>,
    pub review_count: Option<String>,
    pub has_hours: bool,
}

impl ListingSnapshot {
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Both headline fields were found; no manual fallback needed.
    pub fn is_complete(&self) -> bool {
        self.rating.is_some() && self.review_count.is_some()
    }
}

fn rating_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([1-5]\.[0-9])\b").expect("static regex"))
}

fn review_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)[\(\s](\d{1,5})\s*(?:Google\s+)?reviews?\b").expect("static regex")
    })
}

fn hours_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(open|closed|hours|AM|PM)\b").expect("static regex"))
}

/// Fetch the search results page for `"{business_name} {city}"` and extract
/// listing basics from its rendered text.
pub fn fetch(
    client: &Client,
    business_name: &str,
    city: &str,
    timeout: Duration,
) -> ListingSnapshot {
    let query = format!("{business_name} {city}");
    let url = match Url::parse_with_params(SEARCH_URL, &[("q", query.as_str())]) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Could not build search URL for '{query}': {e}");
            return ListingSnapshot::unknown();
        }
    };

    let html = match client.get(url).timeout(timeout).send().and_then(|r| r.text()) {
        Ok(html) => html,
        Err(e) => {
            log::warn!("Listing fetch failed for '{query}': {e}");
            return ListingSnapshot::unknown();
        }
    };

    let snapshot = extract(&html);
    log::debug!(
        "Listing scrape for '{query}': rating={:?} reviews={:?} hours={}",
        snapshot.rating,
        snapshot.review_count,
        snapshot.has_hours
    );
    snapshot
}

/// Extract listing basics from raw search-page markup.
pub fn extract(html: &str) -> ListingSnapshot {
    let text = crate::web::page_text(html);
    let window: String = text.chars().take(TEXT_WINDOW).collect();
    extract_from_text(&window)
}

fn extract_from_text(window: &str) -> ListingSnapshot {
    let rating = rating_re()
        .captures(window)
        .map(|c| c[1].to_string());
    let review_count = review_re()
        .captures(window)
        .map(|c| c[1].to_string());
    let has_hours = hours_re().is_match(window);

    ListingSnapshot {
        rating,
        review_count,
        has_hours,
    }
}

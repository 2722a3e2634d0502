pub mod listing;
pub mod pagespeed;
pub mod seo;
pub mod site;

pub use listing::ListingSnapshot;
pub use seo::SeoSignals;
pub use site::SiteCheck;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;

use crate::config::Config;

/// Browser-like User-Agent sent with page fetches; some sites and the search
/// results page serve stripped-down markup to unknown agents.
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 Chrome/120 Safari/537.36";

/// Best-effort lookups against the web collaborators.
///
/// Every operation degrades to an "unknown" value instead of failing, so the
/// interview can always fall back to a manual prompt. Implementations must
/// never panic on network or parse trouble.
pub trait WebLookup {
    /// Check whether the operator-supplied URL serves a page.
    fn check_site(&self, raw_url: &str) -> SiteCheck;

    /// Mobile PageSpeed percentage for a URL, when the API can provide one.
    fn pagespeed(&self, url: &str) -> Option<u8>;

    /// Scrape basic listing data from a search results page.
    fn listing(&self, business_name: &str, city: &str) -> ListingSnapshot;
}

/// Blocking HTTP implementation of [`WebLookup`].
pub struct HttpLookup {
    client: Client,
    api_key: Option<String>,
    site_timeout: Duration,
    search_timeout: Duration,
    pagespeed_timeout: Duration,
}

impl HttpLookup {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            api_key: config.resolve_pagespeed_key(),
            site_timeout: Duration::from_secs(config.site_timeout_secs()),
            search_timeout: Duration::from_secs(config.search_timeout_secs()),
            pagespeed_timeout: Duration::from_secs(config.pagespeed_timeout_secs()),
        })
    }
}

impl WebLookup for HttpLookup {
    fn check_site(&self, raw_url: &str) -> SiteCheck {
        site::check_website(&self.client, raw_url, self.site_timeout)
    }

    fn pagespeed(&self, url: &str) -> Option<u8> {
        match pagespeed::fetch_percent(
            &self.client,
            url,
            self.api_key.as_deref(),
            self.pagespeed_timeout,
        ) {
            Ok(pct) => Some(pct),
            Err(e) => {
                log::warn!("PageSpeed lookup failed: {e:#}");
                None
            }
        }
    }

    fn listing(&self, business_name: &str, city: &str) -> ListingSnapshot {
        listing::fetch(&self.client, business_name, city, self.search_timeout)
    }
}

/// Flatten a document to its rendered text, whitespace-normalized. Used by
/// both the listing scrape and the on-page SEO checks.
pub(crate) fn page_text(html: &str) -> String {
    let doc = scraper::Html::parse_document(html);
    doc.root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

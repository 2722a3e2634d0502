use std::sync::OnceLock;

use regex::Regex;
use scraper::{Html, Selector};

/// On-page signals the website score is derived from. All detection is
/// heuristic string matching against the fetched markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeoSignals {
    pub city_in_title: bool,
    pub city_in_h1: bool,
    pub city_in_content: bool,
    pub service_mentioned: bool,
    pub is_mobile_ready: bool,
    pub has_phone: bool,
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // US-style: (713) 555-0117, 713-555-0117, 713.555.0117
    RE.get_or_init(|| {
        Regex::new(r"\(?\d{3}\)?[\s\-\.]\d{3}[\s\-\.]\d{4}").expect("static regex")
    })
}

/// Inspect fetched markup for the basic local-SEO signals.
///
/// The city is compared as the segment before the first comma ("Humble, TX"
/// matches on "humble"); the business type as its first word ("Auto Repair"
/// matches on "auto"). Comparisons are case-insensitive substring checks.
pub fn inspect(html: &str, city: &str, business_type: &str) -> SeoSignals {
    let doc = Html::parse_document(html);

    let city_needle = city
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    let type_needle = business_type
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();

    let full_text = crate::web::page_text(html);
    let text_lower = full_text.to_lowercase();

    let title_text = select_text(&doc, "title").to_lowercase();
    let h1_texts: Vec<String> = select_all_text(&doc, "h1")
        .into_iter()
        .map(|t| t.to_lowercase())
        .collect();
    let has_viewport = first_match(&doc, r#"meta[name="viewport"]"#);

    SeoSignals {
        city_in_title: title_text.contains(&city_needle),
        city_in_h1: h1_texts.iter().any(|h| h.contains(&city_needle)),
        city_in_content: text_lower.contains(&city_needle),
        service_mentioned: text_lower.contains(&type_needle),
        is_mobile_ready: has_viewport,
        has_phone: phone_re().is_match(&full_text),
    }
}

fn select_text(doc: &Html, selector: &str) -> String {
    let Ok(sel) = Selector::parse(selector) else {
        return String::new();
    };
    doc.select(&sel)
        .flat_map(|n| n.text())
        .collect::<Vec<_>>()
        .join(" ")
}

fn select_all_text(doc: &Html, selector: &str) -> Vec<String> {
    let Ok(sel) = Selector::parse(selector) else {
        return Vec::new();
    };
    doc.select(&sel)
        .map(|n| n.text().collect::<Vec<_>>().join(" "))
        .collect()
}

fn first_match(doc: &Html, selector: &str) -> bool {
    let Ok(sel) = Selector::parse(selector) else {
        return false;
    };
    doc.select(&sel).next().is_some()
}

use anyhow::Result;
use chrono::Local;

use crate::config::Config;
use crate::output as console;
use crate::prompt::{ask_score, Prompter};
use crate::scoring::{pagespeed_to_score, speed_finding, website_quality};
use crate::web::site::normalize_url;
use crate::web::{SeoSignals, SiteCheck, WebLookup};

use super::record::{AuditRecord, CategoryScores, Competitor};

/// Footer/prompt default when the config does not name an auditor.
pub const DEFAULT_AUDITOR: &str = "Queso Ventures";

/// Run the full interview: collect business facts, auto-fetch what the web
/// collaborators can answer, fall back to manual prompts for the rest, and
/// assemble the finished record.
///
/// The flow is strictly sequential and every network probe is best-effort;
/// only a closed input stream aborts the run.
pub fn collect_audit(
    prompter: &mut dyn Prompter,
    web: &dyn WebLookup,
    config: &Config,
) -> Result<AuditRecord> {
    console::print_banner("PRESENCE AUDIT \u{2014} SMART AUDIT GENERATOR");

    let mut auto_findings: Vec<String> = Vec::new();

    // Business info
    console::print_divider("BUSINESS INFO");
    let business_name = prompter.ask_text("Business name", None)?;
    let business_type = prompter.ask_text("Business type (e.g. Auto Repair, Barber Shop)", None)?;
    let business_city = prompter.ask_text("City / Neighborhood (e.g. Humble, TX)", None)?;
    let website_input = prompter.ask_text("Website URL (or leave blank if none)", Some(""))?;
    let claims_website = normalize_url(&website_input).is_some();

    // Auto-fetch phase
    console::print_divider("AUTO-FETCHING DATA");

    let mut site = if claims_website {
        web.check_site(&website_input)
    } else {
        SiteCheck::not_found()
    };

    if site.reachable {
        let shown = site.url.as_deref().unwrap_or(&website_input);
        console::print_status(true, &format!("Website reachable: {shown}"));
    } else if claims_website {
        console::print_status(false, "Could not reach site automatically");
        let confirm = prompter.ask_text("Do you know the site exists? (y/n)", Some("n"))?;
        if confirm.eq_ignore_ascii_case("y") {
            site = SiteCheck {
                reachable: true,
                url: normalize_url(&website_input),
                html: None,
            };
            console::print_status(true, "Marked as existing (manual confirm), SEO checks skipped");
        }
    }
    let has_website = site.reachable;

    // SEO signals only exist when markup was actually fetched
    let signals: Option<SeoSignals> = site
        .html
        .as_deref()
        .map(|html| crate::web::seo::inspect(html, &business_city, &business_type));
    let quality = website_quality(has_website, signals.as_ref());
    auto_findings.extend(quality.issues.iter().cloned());

    // PageSpeed
    let pagespeed_pct: Option<u8> = if has_website {
        println!("  Fetching PageSpeed score...");
        let pct = site.url.as_deref().and_then(|url| web.pagespeed(url));
        match pct {
            Some(p) => console::print_status(true, &format!("PageSpeed: {p}/100")),
            None => console::print_status(false, "PageSpeed unavailable"),
        }
        pct
    } else {
        None
    };
    let auto_speed_score = pagespeed_pct.map(pagespeed_to_score);
    if let Some(finding) = pagespeed_pct.and_then(speed_finding) {
        auto_findings.push(finding);
    }

    // Listing basics: scrape first, always fall back to manual entry
    println!("  Fetching business listing data...");
    let listing = web.listing(&business_name, &business_city);
    let (review_rating, review_count) = match (listing.rating.as_ref(), listing.review_count.as_ref())
    {
        (Some(rating), Some(count)) => {
            console::print_status(
                true,
                &format!("Listing: rating {rating}, {count} reviews"),
            );
            (rating.clone(), count.clone())
        }
        _ => {
            console::print_status(false, "Could not scrape listing data, enter manually");
            println!("  (Look at their Google listing in your browser)\n");
            let rating = prompter.ask_text("Google star rating (e.g. 4.2, or 'none')", Some("none"))?;
            let count = prompter.ask_text("Number of Google reviews (or '0')", Some("0"))?;
            (rating, count)
        }
    };

    // Summary of what was auto-detected
    println!("\n  Auto-detected:");
    println!(
        "    Website:       {}",
        if has_website { "found" } else { "not found" }
    );
    if has_website {
        match pagespeed_pct {
            Some(p) => println!("    PageSpeed:     {p}/100"),
            None => println!("    PageSpeed:     could not fetch (quota or no key)"),
        }
        match signals.as_ref() {
            Some(seo) => {
                println!("    City in title: {}", yes_no(seo.city_in_title));
                println!("    Mobile ready:  {}", yes_no(seo.is_mobile_ready));
                println!("    Phone on site: {}", yes_no(seo.has_phone));
            }
            None => println!("    SEO checks:    skipped (site confirmed manually)"),
        }
    }
    println!("    Rating:        {review_rating}");
    println!("    Reviews:       {review_count}");

    // Competitor
    console::print_divider("COMPETITOR");
    println!("  Search for: \"{business_type} {business_city}\"");
    println!("  Find the top map result that isn't this business.");
    println!("  Leave blank and hit Enter to skip any field.\n");
    let competitor = Competitor {
        name: prompter.ask_text("Competitor name", Some("N/A"))?,
        review_count: prompter.ask_text("Competitor review count", Some("N/A"))?,
        rating: prompter.ask_text("Competitor star rating", Some("N/A"))?,
        has_website: prompter
            .ask_text("Competitor has website? (y/n)", Some("y"))?
            .eq_ignore_ascii_case("y"),
    };

    // Scoring
    console::print_divider("SCORING");

    let website_score = if has_website {
        println!("\n  Website Quality: auto-detected score {}/5", quality.score);
        let override_input = prompter.ask_text("Override? (leave blank to accept)", Some(""))?;
        parse_override(&override_input).unwrap_or(quality.score)
    } else {
        println!("\n  Website Quality: set to 1 (no website found)");
        1
    };

    let speed_score = if let (Some(auto), Some(pct)) = (auto_speed_score, pagespeed_pct) {
        println!("\n  Mobile Page Speed: auto-detected score {auto}/5 ({pct}/100)");
        let override_input = prompter.ask_text("Override? (leave blank to accept)", Some(""))?;
        parse_override(&override_input).unwrap_or(auto)
    } else if !has_website {
        println!("\n  Mobile Page Speed: set to 1 (no website found)");
        1
    } else {
        println!("\n  Mobile Page Speed: could not auto-fetch");
        if config.resolve_pagespeed_key().is_none() {
            println!("  Tip: add a free PageSpeed API key to enable auto-scoring");
            println!("  Get one at: https://developers.google.com/speed/docs/insights/v5/get-started");
        }
        ask_score(prompter, "Score manually")?
    };

    println!("\n  Google Business Profile");
    println!("  Check: photos, services listed, description written, posts, correct hours");
    let gbp_score = ask_score(prompter, "Score")?;

    println!("\n  Local Search Visibility");
    println!("  Search: \"{business_type} {business_city}\", are they in the top 3 map results?");
    let visibility_score = ask_score(prompter, "Score")?;

    println!("\n  GEO / AI Search Readiness");
    println!("  Ask an AI assistant: \"best {business_type} in {business_city}\", do they appear?");
    let geo_score = ask_score(prompter, "Score")?;

    // Findings
    console::print_divider("FINDINGS");
    if !auto_findings.is_empty() {
        println!("\n  Auto-detected issues (will be included automatically):");
        for finding in &auto_findings {
            println!("    - {finding}");
        }
    }
    let manual_findings =
        prompter.ask_lines("\n  Add your own findings (blank line when done):")?;
    let mut findings = auto_findings;
    findings.extend(manual_findings);

    // Recommendations
    console::print_divider("RECOMMENDATIONS");
    println!("  Enter top 3 recommendations:\n");
    let mut recommendations = Vec::new();
    for i in 1..=3 {
        let rec = prompter.ask_text(&format!("Recommendation {i}"), Some(""))?;
        if !rec.is_empty() {
            recommendations.push(rec);
        }
    }

    let default_auditor = config
        .auditor_name
        .clone()
        .unwrap_or_else(|| DEFAULT_AUDITOR.to_string());
    let auditor_name = prompter.ask_text("Your name", Some(&default_auditor))?;
    let audit_date = Local::now().format("%B %d, %Y").to_string();

    Ok(AuditRecord {
        business_name,
        business_type,
        business_city,
        has_website,
        website_url: if has_website { site.url } else { None },
        review_rating,
        review_count,
        competitor,
        scores: CategoryScores {
            website: website_score,
            speed: speed_score,
            gbp: gbp_score,
            visibility: visibility_score,
            geo: geo_score,
        },
        findings,
        recommendations,
        auditor_name,
        audit_date,
    })
}

/// Accept a manual score override only when it is a plain 1-5 digit;
/// anything else keeps the auto-detected value.
fn parse_override(input: &str) -> Option<u8> {
    input.trim().parse::<u8>().ok().filter(|n| (1..=5).contains(n))
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override_accepts_valid_scores() {
        assert_eq!(parse_override("3"), Some(3));
        assert_eq!(parse_override(" 5 "), Some(5));
        assert_eq!(parse_override("1"), Some(1));
    }

    #[test]
    fn test_parse_override_rejects_junk() {
        assert_eq!(parse_override(""), None);
        assert_eq!(parse_override("0"), None);
        assert_eq!(parse_override("6"), None);
        assert_eq!(parse_override("7"), None);
        assert_eq!(parse_override("five"), None);
        assert_eq!(parse_override("4.5"), None);
    }
}

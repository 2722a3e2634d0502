use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

const API_URL: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

#[derive(Debug, Deserialize)]
struct PageSpeedResponse {
    #[serde(rename = "lighthouseResult")]
    lighthouse_result: Option<LighthouseResult>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct LighthouseResult {
    categories: Option<Categories>,
}

#[derive(Debug, Deserialize)]
struct Categories {
    performance: Option<Category>,
}

#[derive(Debug, Deserialize)]
struct Category {
    score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

/// Fetch the mobile performance percentage (0-100) for a URL.
///
/// The API reports the category score as a 0-1 fraction; it is scaled and
/// rounded to a whole percentage. The `key` parameter is omitted entirely
/// when no API key is configured, which still works within the
/// unauthenticated quota.
pub fn fetch_percent(
    client: &Client,
    url: &str,
    api_key: Option<&str>,
    timeout: Duration,
) -> Result<u8> {
    let mut params = vec![
        ("url", url.to_string()),
        ("strategy", "mobile".to_string()),
        ("category", "performance".to_string()),
    ];
    if let Some(key) = api_key {
        params.push(("key", key.to_string()));
    }

    let response = client
        .get(API_URL)
        .query(&params)
        .timeout(timeout)
        .send()
        .context("PageSpeed request failed")?;

    let data: PageSpeedResponse = response
        .json()
        .context("Failed to parse PageSpeed response")?;

    let score = data
        .lighthouse_result
        .and_then(|l| l.categories)
        .and_then(|c| c.performance)
        .and_then(|p| p.score);

    match score {
        Some(fraction) => {
            let pct = (fraction * 100.0).round().clamp(0.0, 100.0) as u8;
            log::debug!("PageSpeed for {url}: {pct}/100");
            Ok(pct)
        }
        None => {
            let message = data
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            anyhow::bail!("PageSpeed API error: {message}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_score_parses() {
        let body = r#"{
            "lighthouseResult": {
                "categories": {
                    "performance": { "score": 0.55 }
                }
            }
        }"#;
        let data: PageSpeedResponse = serde_json::from_str(body).unwrap();
        let score = data
            .lighthouse_result
            .and_then(|l| l.categories)
            .and_then(|c| c.performance)
            .and_then(|p| p.score);
        assert_eq!(score, Some(0.55));
    }

    #[test]
    fn test_error_response_parses() {
        let body = r#"{ "error": { "message": "Quota exceeded" } }"#;
        let data: PageSpeedResponse = serde_json::from_str(body).unwrap();
        assert!(data.lighthouse_result.is_none());
        assert_eq!(
            data.error.and_then(|e| e.message).as_deref(),
            Some("Quota exceeded")
        );
    }

    #[test]
    fn test_missing_category_is_none() {
        let body = r#"{ "lighthouseResult": { "categories": {} } }"#;
        let data: PageSpeedResponse = serde_json::from_str(body).unwrap();
        let score = data
            .lighthouse_result
            .and_then(|l| l.categories)
            .and_then(|c| c.performance)
            .and_then(|p| p.score);
        assert_eq!(score, None);
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let body = r#"{
            "captchaResult": "CAPTCHA_NOT_NEEDED",
            "lighthouseResult": {
                "requestedUrl": "https://example.com",
                "categories": {
                    "performance": { "id": "performance", "score": 0.91 }
                }
            }
        }"#;
        let data: PageSpeedResponse = serde_json::from_str(body).unwrap();
        let score = data
            .lighthouse_result
            .and_then(|l| l.categories)
            .and_then(|c| c.performance)
            .and_then(|p| p.score);
        assert_eq!(score, Some(0.91));
    }
}

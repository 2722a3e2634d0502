use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Outcome of the reachability probe. `html` is only present when the page
/// was actually fetched; a manually confirmed site has a URL but no markup.
#[derive(Debug, Clone, Default)]
pub struct SiteCheck {
    pub reachable: bool,
    pub url: Option<String>,
    pub html: Option<String>,
}

impl SiteCheck {
    /// No site: nothing was provided or nothing answered.
    pub fn not_found() -> Self {
        Self::default()
    }
}

/// Normalize operator input to a scheme-qualified URL. Blank input and the
/// "none"/"n" shorthands mean "no website".
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    if lowered == "none" || lowered == "n" {
        return None;
    }
    if trimmed.starts_with("http") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Check if the website exists and serves a page.
///
/// Any status below 400 counts as reachable. When the secure fetch fails at
/// the transport level (TLS handshake included; reqwest does not let us
/// distinguish), a single plaintext retry is attempted before giving up.
/// Never returns an error: unreachable is an answer, not a failure.
pub fn check_website(client: &Client, raw_url: &str, timeout: Duration) -> SiteCheck {
    let Some(normalized) = normalize_url(raw_url) else {
        return SiteCheck::not_found();
    };

    if url::Url::parse(&normalized).is_err() {
        log::debug!("URL failed to parse after normalization: {normalized}");
        return SiteCheck {
            reachable: false,
            url: Some(normalized),
            html: None,
        };
    }

    match fetch(client, &normalized, timeout) {
        Ok((status, body)) if status.as_u16() < 400 => SiteCheck {
            reachable: true,
            url: Some(normalized),
            html: Some(body),
        },
        Ok((status, _)) => {
            log::debug!("Website returned HTTP {status}");
            SiteCheck {
                reachable: false,
                url: Some(normalized),
                html: None,
            }
        }
        Err(err) => {
            log::debug!("Could not reach {normalized}: {err}");
            if let Some(rest) = normalized.strip_prefix("https://") {
                let plain = format!("http://{rest}");
                if let Ok((status, body)) = fetch(client, &plain, timeout) {
                    if status.as_u16() < 400 {
                        return SiteCheck {
                            reachable: true,
                            url: Some(plain),
                            html: Some(body),
                        };
                    }
                }
            }
            SiteCheck {
                reachable: false,
                url: Some(normalized),
                html: None,
            }
        }
    }
}

fn fetch(client: &Client, url: &str, timeout: Duration) -> reqwest::Result<(StatusCode, String)> {
    let resp = client.get(url).timeout(timeout).send()?;
    let status = resp.status();
    let body = resp.text()?;
    Ok((status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_scheme() {
        assert_eq!(
            normalize_url("joesgarage.com"),
            Some("https://joesgarage.com".to_string())
        );
    }

    #[test]
    fn test_normalize_keeps_existing_scheme() {
        assert_eq!(
            normalize_url("http://joesgarage.com"),
            Some("http://joesgarage.com".to_string())
        );
        assert_eq!(
            normalize_url("https://joesgarage.com"),
            Some("https://joesgarage.com".to_string())
        );
    }

    #[test]
    fn test_normalize_trims_input() {
        assert_eq!(
            normalize_url("  joesgarage.com  "),
            Some("https://joesgarage.com".to_string())
        );
    }

    #[test]
    fn test_normalize_none_shorthands() {
        assert_eq!(normalize_url(""), None);
        assert_eq!(normalize_url("   "), None);
        assert_eq!(normalize_url("none"), None);
        assert_eq!(normalize_url("NONE"), None);
        assert_eq!(normalize_url("n"), None);
    }
}

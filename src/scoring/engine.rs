use crate::web::SeoSignals;

/// Result of the automated website-quality derivation: a 1-5 score plus the
/// human-readable issues behind every applied penalty, in detection order.
#[derive(Debug, Clone, PartialEq)]
pub struct WebsiteQuality {
    pub score: u8,
    pub issues: Vec<String>,
}

/// Convert a 0-100 PageSpeed percentage to a 1-5 score.
pub fn pagespeed_to_score(pct: u8) -> u8 {
    if pct >= 90 {
        5
    } else if pct >= 70 {
        4
    } else if pct >= 50 {
        3
    } else if pct >= 30 {
        2
    } else {
        1
    }
}

/// Auto finding derived from the PageSpeed percentage. Only sub-70 scores
/// produce one.
pub fn speed_finding(pct: u8) -> Option<String> {
    if pct < 50 {
        Some(format!(
            "Mobile PageSpeed score is {pct}/100 - very slow, hurts rankings"
        ))
    } else if pct < 70 {
        Some(format!(
            "Mobile PageSpeed score is {pct}/100 - needs improvement"
        ))
    } else {
        None
    }
}

/// Derive a 1-5 website score from the automated signals.
///
/// Starts at 5 and subtracts a fixed penalty per missing signal. With no
/// fetched markup (`signals` is None, e.g. the operator confirmed the site
/// exists but it could not be fetched) every penalty applies. The result is
/// rounded with `f64::round` (half away from zero) and clamped to at least 1.
pub fn website_quality(site_reachable: bool, signals: Option<&SeoSignals>) -> WebsiteQuality {
    if !site_reachable {
        return WebsiteQuality {
            score: 1,
            issues: vec!["No website found".to_string()],
        };
    }

    // (signal present?, penalty, issue text)
    let checks = [
        (
            signals.is_some_and(|s| s.city_in_title),
            0.5,
            "City not in page title",
        ),
        (
            signals.is_some_and(|s| s.city_in_h1),
            0.5,
            "City not in main headline",
        ),
        (
            signals.is_some_and(|s| s.city_in_content),
            1.0,
            "City name not found in page content",
        ),
        (
            signals.is_some_and(|s| s.service_mentioned),
            1.0,
            "Service type not clearly mentioned on page",
        ),
        (
            signals.is_some_and(|s| s.is_mobile_ready),
            1.0,
            "No mobile viewport meta tag, may not be mobile friendly",
        ),
        (
            signals.is_some_and(|s| s.has_phone),
            0.5,
            "No phone number detected on page",
        ),
    ];

    let mut score = 5.0_f64;
    let mut issues = Vec::new();
    for (present, penalty, issue) in checks {
        if !present {
            score -= penalty;
            issues.push(issue.to_string());
        }
    }

    WebsiteQuality {
        score: score.round().max(1.0) as u8,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_signals() -> SeoSignals {
        SeoSignals {
            city_in_title: true,
            city_in_h1: true,
            city_in_content: true,
            service_mentioned: true,
            is_mobile_ready: true,
            has_phone: true,
        }
    }

    #[test]
    fn test_pagespeed_thresholds_at_boundaries() {
        assert_eq!(pagespeed_to_score(100), 5);
        assert_eq!(pagespeed_to_score(90), 5);
        assert_eq!(pagespeed_to_score(89), 4);
        assert_eq!(pagespeed_to_score(70), 4);
        assert_eq!(pagespeed_to_score(69), 3);
        assert_eq!(pagespeed_to_score(50), 3);
        assert_eq!(pagespeed_to_score(49), 2);
        assert_eq!(pagespeed_to_score(30), 2);
        assert_eq!(pagespeed_to_score(29), 1);
        assert_eq!(pagespeed_to_score(0), 1);
    }

    #[test]
    fn test_pagespeed_mapping_is_monotonic() {
        let mut last = 0;
        for pct in 0..=100 {
            let score = pagespeed_to_score(pct);
            assert!(score >= last, "score dropped at pct={pct}");
            last = score;
        }
    }

    #[test]
    fn test_speed_finding_tiers() {
        assert!(speed_finding(49).unwrap().contains("very slow"));
        assert!(speed_finding(50).unwrap().contains("needs improvement"));
        assert!(speed_finding(55).unwrap().contains("needs improvement"));
        assert!(speed_finding(69).unwrap().contains("needs improvement"));
        assert_eq!(speed_finding(70), None);
        assert_eq!(speed_finding(95), None);
    }

    #[test]
    fn test_perfect_site_scores_five() {
        let signals = all_signals();
        let quality = website_quality(true, Some(&signals));
        assert_eq!(quality.score, 5);
        assert!(quality.issues.is_empty());
    }

    #[test]
    fn test_unreachable_site_forces_one() {
        let quality = website_quality(false, None);
        assert_eq!(quality.score, 1);
        assert_eq!(quality.issues, vec!["No website found".to_string()]);
    }

    #[test]
    fn test_half_point_penalties() {
        // Missing title + headline mentions: 5 - 1.0 = 4
        let signals = SeoSignals {
            city_in_title: false,
            city_in_h1: false,
            ..all_signals()
        };
        let quality = website_quality(true, Some(&signals));
        assert_eq!(quality.score, 4);
        assert_eq!(quality.issues.len(), 2);
    }

    #[test]
    fn test_single_half_penalty_rounds_up() {
        // 5 - 0.5 = 4.5, rounds half away from zero to 5
        let signals = SeoSignals {
            has_phone: false,
            ..all_signals()
        };
        let quality = website_quality(true, Some(&signals));
        assert_eq!(quality.score, 5);
        assert_eq!(quality.issues, vec!["No phone number detected on page".to_string()]);
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // Penalties 0.5 + 0.5 + 1.0 + 0.5 = 2.5 -> 2.5 rounds to 3
        let signals = SeoSignals {
            city_in_title: false,
            city_in_h1: false,
            city_in_content: false,
            has_phone: false,
            ..all_signals()
        };
        let quality = website_quality(true, Some(&signals));
        assert_eq!(quality.score, 3);
    }

    #[test]
    fn test_all_penalties_clamp_to_one() {
        // 5 - 4.5 = 0.5 -> rounds to 1, clamp keeps it at 1
        let quality = website_quality(true, None);
        assert_eq!(quality.score, 1);
        assert_eq!(quality.issues.len(), 6);
    }

    #[test]
    fn test_every_penalty_subset_matches_formula() {
        let penalties = [0.5, 0.5, 1.0, 1.0, 1.0, 0.5];
        for mask in 0u8..64 {
            let signals = SeoSignals {
                city_in_title: mask & 1 == 0,
                city_in_h1: mask & 2 == 0,
                city_in_content: mask & 4 == 0,
                service_mentioned: mask & 8 == 0,
                is_mobile_ready: mask & 16 == 0,
                has_phone: mask & 32 == 0,
            };
            let total: f64 = (0..6)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(|bit| penalties[bit])
                .sum();
            let expected = (5.0 - total).round().max(1.0) as u8;
            let quality = website_quality(true, Some(&signals));
            assert_eq!(quality.score, expected, "mask={mask:06b}");
            assert_eq!(quality.issues.len(), mask.count_ones() as usize);
        }
    }

    #[test]
    fn test_issue_order_is_fixed() {
        let quality = website_quality(true, None);
        assert_eq!(
            quality.issues,
            vec![
                "City not in page title",
                "City not in main headline",
                "City name not found in page content",
                "Service type not clearly mentioned on page",
                "No mobile viewport meta tag, may not be mobile friendly",
                "No phone number detected on page",
            ]
        );
    }
}

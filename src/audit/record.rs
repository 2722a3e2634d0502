use serde::Serialize;

/// Everything one audit run collects, immutable once the interview finishes.
/// The rendering stage consumes this and nothing else, so the same record
/// always produces the same report content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    pub business_name: String,
    pub business_type: String,
    pub business_city: String,
    pub has_website: bool,
    pub website_url: Option<String>,
    /// Star rating as entered or scraped, e.g. "4.8" or "none"
    pub review_rating: String,
    /// Review count as entered or scraped, e.g. "692" or "0"
    pub review_count: String,
    pub competitor: Competitor,
    pub scores: CategoryScores,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub auditor_name: String,
    pub audit_date: String,
}

/// Competitor comparison fields, entered verbatim by the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Competitor {
    pub name: String,
    pub review_count: String,
    pub rating: String,
    pub has_website: bool,
}

/// The five 1-5 category scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub website: u8,
    pub speed: u8,
    pub gbp: u8,
    pub visibility: u8,
    pub geo: u8,
}

impl CategoryScores {
    pub const MAX_TOTAL: u8 = 25;

    pub fn total(&self) -> u8 {
        self.website + self.speed + self.gbp + self.visibility + self.geo
    }

    /// Aggregate as a whole percentage of the 25-point maximum.
    pub fn overall_percent(&self) -> u8 {
        (u32::from(self.total()) * 100 / u32::from(Self::MAX_TOTAL)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_and_percent() {
        let scores = CategoryScores {
            website: 5,
            speed: 3,
            gbp: 5,
            visibility: 5,
            geo: 5,
        };
        assert_eq!(scores.total(), 23);
        assert_eq!(scores.overall_percent(), 92);
    }

    #[test]
    fn test_floor_scores() {
        let scores = CategoryScores {
            website: 1,
            speed: 1,
            gbp: 1,
            visibility: 1,
            geo: 1,
        };
        assert_eq!(scores.total(), 5);
        assert_eq!(scores.overall_percent(), 20);
    }

    #[test]
    fn test_perfect_is_one_hundred() {
        let scores = CategoryScores {
            website: 5,
            speed: 5,
            gbp: 5,
            visibility: 5,
            geo: 5,
        };
        assert_eq!(scores.overall_percent(), 100);
    }
}

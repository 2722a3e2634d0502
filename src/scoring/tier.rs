/// Three-band rating applied to both single 1-5 categories and the 25-point
/// aggregate. Bands sit at 40% and 70% of the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    NeedsWork,
    Fair,
    Good,
}

impl Tier {
    pub fn for_score(score: u8, max_score: u8) -> Self {
        let ratio = f64::from(score) / f64::from(max_score);
        if ratio < 0.4 {
            Tier::NeedsWork
        } else if ratio < 0.7 {
            Tier::Fair
        } else {
            Tier::Good
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::NeedsWork => "Needs Work",
            Tier::Fair => "Fair",
            Tier::Good => "Good",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bands() {
        assert_eq!(Tier::for_score(1, 5), Tier::NeedsWork);
        assert_eq!(Tier::for_score(2, 5), Tier::Fair); // 0.4 exactly
        assert_eq!(Tier::for_score(3, 5), Tier::Fair);
        assert_eq!(Tier::for_score(4, 5), Tier::Good); // 0.8
        assert_eq!(Tier::for_score(5, 5), Tier::Good);
    }

    #[test]
    fn test_aggregate_bands() {
        assert_eq!(Tier::for_score(9, 25), Tier::NeedsWork); // 0.36
        assert_eq!(Tier::for_score(10, 25), Tier::Fair); // 0.40 exactly
        assert_eq!(Tier::for_score(17, 25), Tier::Fair); // 0.68
        assert_eq!(Tier::for_score(18, 25), Tier::Good); // 0.72
        assert_eq!(Tier::for_score(25, 25), Tier::Good);
    }

    #[test]
    fn test_boundaries_do_not_overlap() {
        // 0.7 exactly lands in the top band, not Fair
        assert_eq!(Tier::for_score(7, 10), Tier::Good);
        assert_eq!(Tier::for_score(4, 10), Tier::Fair);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Tier::NeedsWork.label(), "Needs Work");
        assert_eq!(Tier::Fair.label(), "Fair");
        assert_eq!(Tier::Good.label(), "Good");
    }
}

//! Score bands used to categorize match results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Recommendation tier of an overall match score.
///
/// Bands are closed on the lower edge: a score of exactly 0.8 is
/// [`Tier::HighlyRecommended`]. Ordering follows the declaration order, best
/// tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Consider")]
    Consider,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

impl Tier {
    pub const HIGHLY_RECOMMENDED_MIN: f64 = 0.8;
    pub const RECOMMENDED_MIN: f64 = 0.6;
    pub const CONSIDER_MIN: f64 = 0.4;

    /// Tier of `score`. NaN falls into [`Tier::NotRecommended`].
    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGHLY_RECOMMENDED_MIN {
            Tier::HighlyRecommended
        } else if score >= Self::RECOMMENDED_MIN {
            Tier::Recommended
        } else if score >= Self::CONSIDER_MIN {
            Tier::Consider
        } else {
            Tier::NotRecommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::HighlyRecommended => "Highly Recommended",
            Tier::Recommended => "Recommended",
            Tier::Consider => "Consider",
            Tier::NotRecommended => "Not Recommended",
        }
    }

    /// All tiers, best first.
    pub fn ordered() -> [Tier; 4] {
        [
            Tier::HighlyRecommended,
            Tier::Recommended,
            Tier::Consider,
            Tier::NotRecommended,
        ]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_score(1.0), Tier::HighlyRecommended);
        assert_eq!(Tier::from_score(0.8), Tier::HighlyRecommended);
        assert_eq!(Tier::from_score(0.79999), Tier::Recommended);
        assert_eq!(Tier::from_score(0.6), Tier::Recommended);
        assert_eq!(Tier::from_score(0.59999), Tier::Consider);
        assert_eq!(Tier::from_score(0.4), Tier::Consider);
        assert_eq!(Tier::from_score(0.39999), Tier::NotRecommended);
        assert_eq!(Tier::from_score(0.0), Tier::NotRecommended);
        assert_eq!(Tier::from_score(f64::NAN), Tier::NotRecommended);
    }

    #[test]
    fn test_tier_serialization_uses_labels() {
        assert_eq!(
            serde_json::to_string(&Tier::HighlyRecommended).unwrap(),
            "\"Highly Recommended\""
        );
        let tier: Tier = serde_json::from_str("\"Not Recommended\"").unwrap();
        assert_eq!(tier, Tier::NotRecommended);
        assert_eq!(Tier::Consider.to_string(), "Consider");
    }

    #[test]
    fn test_tier_ordering() {
        let mut tiers = vec![Tier::NotRecommended, Tier::HighlyRecommended, Tier::Consider];
        tiers.sort();
        assert_eq!(
            tiers,
            vec![Tier::HighlyRecommended, Tier::Consider, Tier::NotRecommended]
        );
        assert_eq!(Tier::ordered()[1], Tier::Recommended);
    }
}

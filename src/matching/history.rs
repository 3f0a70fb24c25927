//! Pluggable experience and education scoring.
//!
//! The aggregator scores a candidate's work history and education through
//! [`HistoryScorer`]. A scorer receives the job's free-text requirement and
//! the candidate's structured history and returns a value in [0, 1].
//!
//! # Examples
//!
//! ```
//! use talentrank::matching::history::HistoryScorer;
//! use talentrank::matching::record::ExperienceEntry;
//!
//! /// Rewards any history at all.
//! struct AnyExperience;
//!
//! impl HistoryScorer<ExperienceEntry> for AnyExperience {
//!     fn score(&self, _requirement: &str, history: &[ExperienceEntry]) -> f64 {
//!         if history.is_empty() { 0.0 } else { 1.0 }
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "any_experience"
//!     }
//! }
//!
//! assert_eq!(AnyExperience.score("3+ years", &[]), 0.0);
//! ```

use log::warn;

use crate::error::{Result, TalentrankError};

/// Score returned by [`NeutralScorer`] unless configured otherwise.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Scores a candidate history `H` against a job requirement string.
pub trait HistoryScorer<H>: Send + Sync {
    /// Return a score in [0, 1]. Out-of-range values are clamped by the caller.
    fn score(&self, requirement: &str, history: &[H]) -> f64;

    /// Get the name of this scorer (for logging).
    fn name(&self) -> &'static str;
}

/// Returns the same value for every input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutralScorer {
    value: f64,
}

impl NeutralScorer {
    /// A scorer that always returns [`NEUTRAL_SCORE`].
    pub fn new() -> Self {
        NeutralScorer {
            value: NEUTRAL_SCORE,
        }
    }

    /// A scorer that always returns `value`, which must lie in [0, 1].
    pub fn with_value(value: f64) -> Result<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(TalentrankError::invalid_config(format!(
                "neutral score must be within [0, 1], got {value}"
            )));
        }
        Ok(NeutralScorer { value })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Default for NeutralScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> HistoryScorer<H> for NeutralScorer {
    fn score(&self, _requirement: &str, _history: &[H]) -> f64 {
        self.value
    }

    fn name(&self) -> &'static str {
        "neutral"
    }
}

/// Clamp a plugged scorer's output into [0, 1]. NaN becomes `0.0`.
pub(crate) fn clamp_score(scorer: &str, value: f64) -> f64 {
    if value.is_nan() {
        warn!("scorer '{scorer}' returned NaN, using 0.0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&value) {
        warn!("scorer '{scorer}' returned {value}, clamping to [0, 1]");
        return value.clamp(0.0, 1.0);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::record::{EducationEntry, ExperienceEntry};

    #[test]
    fn test_neutral_scorer_default_value() {
        let scorer = NeutralScorer::new();
        let history = vec![ExperienceEntry::default()];
        assert_eq!(scorer.score("5 years", history.as_slice()), NEUTRAL_SCORE);
        assert_eq!(
            HistoryScorer::<EducationEntry>::score(&scorer, "PhD", &[]),
            NEUTRAL_SCORE
        );
        assert_eq!(HistoryScorer::<ExperienceEntry>::name(&scorer), "neutral");
    }

    #[test]
    fn test_neutral_scorer_with_value() {
        let scorer = NeutralScorer::with_value(0.8).unwrap();
        assert_eq!(
            HistoryScorer::<ExperienceEntry>::score(&scorer, "", &[]),
            0.8
        );

        assert!(NeutralScorer::with_value(1.5).is_err());
        assert!(NeutralScorer::with_value(-0.1).is_err());
        assert!(NeutralScorer::with_value(f64::NAN).is_err());
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score("test", 0.25), 0.25);
        assert_eq!(clamp_score("test", 1.7), 1.0);
        assert_eq!(clamp_score("test", -3.0), 0.0);
        assert_eq!(clamp_score("test", f64::NAN), 0.0);
        assert_eq!(clamp_score("test", f64::INFINITY), 1.0);
    }
}

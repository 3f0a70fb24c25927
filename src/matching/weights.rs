//! Weighting policy for the overall match score.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TalentrankError};

/// Allowed deviation of the weight sum from 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights of the four sub-scores in the overall match score.
///
/// The defaults (0.4 / 0.4 / 0.1 / 0.1) favour text similarity and skill
/// coverage. Any non-negative combination summing to 1.0 is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    pub text_similarity: f64,
    pub skill_match: f64,
    pub experience_match: f64,
    pub education_match: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        MatchWeights {
            text_similarity: 0.4,
            skill_match: 0.4,
            experience_match: 0.1,
            education_match: 0.1,
        }
    }
}

impl MatchWeights {
    pub fn new(
        text_similarity: f64,
        skill_match: f64,
        experience_match: f64,
        education_match: f64,
    ) -> Result<Self> {
        let weights = MatchWeights {
            text_similarity,
            skill_match,
            experience_match,
            education_match,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Check that every weight is finite and non-negative and that they sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.named() {
            if !weight.is_finite() {
                return Err(TalentrankError::invalid_config(format!(
                    "weight `{name}` must be finite, got {weight}"
                )));
            }
            if weight < 0.0 {
                return Err(TalentrankError::invalid_config(format!(
                    "weight `{name}` must not be negative, got {weight}"
                )));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(TalentrankError::invalid_config(format!(
                "match weights must sum to 1.0, got {sum}"
            )));
        }

        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.text_similarity + self.skill_match + self.experience_match + self.education_match
    }

    /// Weighted sum of the four sub-scores, clamped to [0, 1].
    pub fn combine(
        &self,
        text_similarity: f64,
        skill_match: f64,
        experience_match: f64,
        education_match: f64,
    ) -> f64 {
        let overall = self.text_similarity * text_similarity
            + self.skill_match * skill_match
            + self.experience_match * experience_match
            + self.education_match * education_match;
        // Adding 0.0 turns -0.0 into 0.0.
        overall.clamp(0.0, 1.0) + 0.0
    }

    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("text_similarity", self.text_similarity),
            ("skill_match", self.skill_match),
            ("experience_match", self.experience_match),
            ("education_match", self.education_match),
        ]
    }
}

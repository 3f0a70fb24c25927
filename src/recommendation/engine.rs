//! Threshold filtering, top-N selection, and tiered reports.

use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TalentrankError};
use crate::matching::aggregator::MatchResult;
use crate::recommendation::ranker::{rank, rank_in_place};
use crate::recommendation::tier::Tier;

/// Configuration for recommendation selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Minimum overall score for a result to be recommended (0.0 - 1.0).
    pub min_match_threshold: f64,
    /// Number of results returned when no explicit limit is given.
    pub default_limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            min_match_threshold: 0.3,
            default_limit: 10,
        }
    }
}

impl RecommendationConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.min_match_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.min_match_threshold)
        {
            return Err(TalentrankError::invalid_config(format!(
                "min_match_threshold must be within [0, 1], got {}",
                self.min_match_threshold
            )));
        }
        Ok(())
    }
}

/// Per-tier counts and the mean overall score of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_candidates: usize,
    pub highly_recommended: usize,
    pub recommended: usize,
    pub consider: usize,
    pub not_recommended: usize,
    /// Mean overall score; `0.0` for an empty pool.
    pub average_score: f64,
}

/// Full-pool recommendation report for one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub total_candidates: usize,
    pub summary: ReportSummary,
    /// Every tier is present, each list ranked.
    pub categories: BTreeMap<Tier, Vec<MatchResult>>,
    /// All results, ranked.
    pub recommendations: Vec<MatchResult>,
}

impl RecommendationReport {
    /// Ranked results of one tier.
    pub fn tier(&self, tier: Tier) -> &[MatchResult] {
        self.categories.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Selects and categorizes match results.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    /// Create an engine; fails if `config` is invalid.
    pub fn new(config: RecommendationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Results at or above the threshold, ranked and truncated to `limit`.
    ///
    /// `None` uses the configured default limit; `Some(0)` yields nothing.
    pub fn top_candidates(&self, results: &[MatchResult], limit: Option<usize>) -> Vec<MatchResult> {
        let limit = limit.unwrap_or(self.config.default_limit);
        if limit == 0 {
            return Vec::new();
        }

        let mut selected: Vec<MatchResult> = results
            .iter()
            .filter(|r| r.overall_match_score() >= self.config.min_match_threshold)
            .cloned()
            .collect();
        rank_in_place(&mut selected);
        selected.truncate(limit);

        info!(
            "selected {} of {} results (threshold {}, limit {limit})",
            selected.len(),
            results.len(),
            self.config.min_match_threshold
        );

        selected
    }

    /// Categorize the whole, unfiltered pool into tiers.
    pub fn build_report(&self, results: &[MatchResult]) -> RecommendationReport {
        let recommendations = rank(results);

        let mut categories: BTreeMap<Tier, Vec<MatchResult>> =
            Tier::ordered().into_iter().map(|t| (t, Vec::new())).collect();
        for result in &recommendations {
            categories
                .entry(Tier::from_score(result.overall_match_score()))
                .or_default()
                .push(result.clone());
        }

        let total = recommendations.len();
        let average_score = if total == 0 {
            0.0
        } else {
            recommendations
                .iter()
                .map(MatchResult::overall_match_score)
                .sum::<f64>()
                / total as f64
        };

        let count = |tier: Tier| categories.get(&tier).map_or(0, Vec::len);
        let summary = ReportSummary {
            total_candidates: total,
            highly_recommended: count(Tier::HighlyRecommended),
            recommended: count(Tier::Recommended),
            consider: count(Tier::Consider),
            not_recommended: count(Tier::NotRecommended),
            average_score,
        };

        info!(
            "built report over {total} results: {} highly recommended, {} recommended, {} consider, {} not recommended",
            summary.highly_recommended, summary.recommended, summary.consider, summary.not_recommended
        );

        RecommendationReport {
            total_candidates: total,
            summary,
            categories,
            recommendations,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(RecommendationConfig::default())
            .expect("default recommendation config should be valid")
    }
}

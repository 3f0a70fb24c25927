//! Explicitly constructed matching engine.
//!
//! A [`MatchEngine`] bundles the aggregation policy and the recommendation
//! policy into one value built from an [`EngineConfig`]. The configuration
//! is validated once at construction, and the engine never consults the
//! environment or process-wide state afterwards.
//!
//! # Examples
//!
//! ```
//! use talentrank::engine::{EngineConfig, MatchEngine};
//! use talentrank::matching::record::{CandidateRecord, JobRecord};
//!
//! let engine = MatchEngine::new(EngineConfig::default()).unwrap();
//!
//! let job = JobRecord::builder("job-1")
//!     .title("Backend Engineer")
//!     .description("Python services backed by SQL")
//!     .required_skills(["python", "sql"])
//!     .build()
//!     .unwrap();
//! let candidates = vec![
//!     CandidateRecord::builder("alice")
//!         .resume_text("Python backend engineer, SQL tuning")
//!         .skills(["Python", "SQL"])
//!         .build()
//!         .unwrap(),
//!     CandidateRecord::builder("bob")
//!         .resume_text("Pastry chef")
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let results = engine.match_candidates(&job, &candidates);
//! assert_eq!(results[0].candidate_id(), "alice");
//!
//! let report = engine.build_report(&results);
//! assert_eq!(report.total_candidates, 2);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matching::aggregator::{MatchAggregator, MatchResult};
use crate::matching::history::HistoryScorer;
use crate::matching::record::{CandidateRecord, EducationEntry, ExperienceEntry, JobRecord};
use crate::matching::weights::MatchWeights;
use crate::recommendation::engine::{
    RecommendationConfig, RecommendationEngine, RecommendationReport,
};
use crate::recommendation::ranker::rank_in_place;

/// Engine configuration: weighting policy plus recommendation policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: MatchWeights,
    pub recommendation: RecommendationConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.recommendation.validate()
    }
}

/// Scores, ranks, and reports candidates for a job.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: EngineConfig,
    aggregator: MatchAggregator,
    recommender: RecommendationEngine,
}

impl MatchEngine {
    /// Build an engine with neutral experience and education scorers.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(MatchEngine {
            config,
            aggregator: MatchAggregator::new(config.weights)?,
            recommender: RecommendationEngine::new(config.recommendation)?,
        })
    }

    /// Build an engine with custom experience and education scorers.
    pub fn with_scorers(
        config: EngineConfig,
        experience: Arc<dyn HistoryScorer<ExperienceEntry>>,
        education: Arc<dyn HistoryScorer<EducationEntry>>,
    ) -> Result<Self> {
        let mut engine = Self::new(config)?;
        engine.aggregator = engine.aggregator.with_scorers(experience, education);
        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn aggregator(&self) -> &MatchAggregator {
        &self.aggregator
    }

    /// Score every candidate against `job` and rank the results.
    pub fn match_candidates(&self, job: &JobRecord, candidates: &[CandidateRecord]) -> Vec<MatchResult> {
        let mut results = self.aggregator.aggregate_all(job, candidates);
        rank_in_place(&mut results);
        results
    }

    /// See [`RecommendationEngine::top_candidates`].
    pub fn top_candidates(&self, results: &[MatchResult], limit: Option<usize>) -> Vec<MatchResult> {
        self.recommender.top_candidates(results, limit)
    }

    /// See [`RecommendationEngine::build_report`].
    pub fn build_report(&self, results: &[MatchResult]) -> RecommendationReport {
        self.recommender.build_report(results)
    }
}

//! Scoring of job/candidate pairs.
//!
//! [`MatchAggregator`] combines four sub-scores into one [`MatchResult`]:
//! TF-IDF text similarity ([`TextSimilarityScorer`]), required skill
//! coverage ([`SkillOverlapScorer`]), and pluggable experience and education
//! scores ([`HistoryScorer`]), weighted by [`MatchWeights`].

pub mod aggregator;
pub mod history;
pub mod record;
pub mod similarity;
pub mod skills;
pub mod weights;

pub use aggregator::{MatchAggregator, MatchResult, MatchResultData};
pub use history::{HistoryScorer, NEUTRAL_SCORE, NeutralScorer};
pub use record::{CandidateRecord, EducationEntry, ExperienceEntry, JobRecord};
pub use similarity::{TextSimilarityScorer, TfIdfVectorizer};
pub use skills::{SkillExtractor, SkillOverlap, SkillOverlapScorer, normalize_skill};
pub use weights::MatchWeights;

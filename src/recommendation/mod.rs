//! Ranking, tiering, and reporting over scored match results.

pub mod engine;
pub mod ranker;
pub mod tier;

pub use engine::{RecommendationConfig, RecommendationEngine, RecommendationReport, ReportSummary};
pub use ranker::rank;
pub use tier::Tier;

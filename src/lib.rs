//! # Talentrank
//!
//! Job/candidate matching and recommendation for Rust.
//!
//! ## Features
//!
//! - Pairwise TF-IDF text similarity over a pluggable analysis pipeline
//! - Normalized skill overlap with matched and missing skill sets
//! - Configurable weighting policy, validated at construction
//! - Pluggable experience and education scorers
//! - Deterministic ranking and tiered recommendation reports
//! - Parallel scoring of large candidate pools

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;
pub mod matching;
pub mod recommendation;

pub mod prelude {
    pub use crate::engine::{EngineConfig, MatchEngine};
    pub use crate::error::{Result, TalentrankError};
    pub use crate::matching::{
        CandidateRecord, EducationEntry, ExperienceEntry, HistoryScorer, JobRecord, MatchResult,
        MatchWeights,
    };
    pub use crate::recommendation::{RecommendationConfig, RecommendationReport, Tier};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

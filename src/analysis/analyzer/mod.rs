//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
mod english;
mod pipeline;

pub use analyzer::Analyzer;
pub use english::{EnglishAnalyzer, EnglishAnalyzerBuilder};
pub use pipeline::PipelineAnalyzer;

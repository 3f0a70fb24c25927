//! Text analysis module for Talentrank.
//!
//! Raw job and resume text is turned into a stream of normalized tokens
//! before any similarity is computed. The pipeline is the classic
//! tokenizer + filter chain; the similarity scorer accepts any
//! [`Analyzer`] so callers can plug in richer preprocessing.

pub mod analyzer;
pub mod keyword;
pub mod preprocess;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use keyword::{Keyword, KeywordExtractor};
pub use preprocess::{PreprocessedText, TextPreprocessor};
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;

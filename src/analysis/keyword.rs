//! Frequency-based keyword extraction.
//!
//! Produces the most frequent content words of a text. Used to summarize a
//! resume or job description before it is matched, and exposed by the CLI.

use std::cmp::Ordering;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::error::Result;

/// Default number of keywords returned.
pub const DEFAULT_KEYWORD_LIMIT: usize = 20;

/// Minimum keyword length in characters.
const MIN_KEYWORD_CHARS: usize = 3;

/// A keyword together with its frequency in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub frequency: usize,
}

/// Extracts the top-N keywords of a text by term frequency.
pub struct KeywordExtractor {
    analyzer: Arc<dyn Analyzer>,
    limit: usize,
}

impl KeywordExtractor {
    /// Create an extractor over the English analyzer with the default limit.
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(EnglishAnalyzer::new()?)))
    }

    /// Create an extractor over a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        KeywordExtractor {
            analyzer,
            limit: DEFAULT_KEYWORD_LIMIT,
        }
    }

    /// Set the maximum number of keywords returned.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Extract keywords, most frequent first; equal frequencies sort by term.
    pub fn extract(&self, text: &str) -> Result<Vec<Keyword>> {
        let mut counts: AHashMap<String, usize> = AHashMap::new();
        for term in self.analyzer.terms(text)? {
            if term.chars().count() >= MIN_KEYWORD_CHARS {
                *counts.entry(term).or_insert(0) += 1;
            }
        }

        let mut keywords: Vec<Keyword> = counts
            .into_iter()
            .map(|(term, frequency)| Keyword { term, frequency })
            .collect();
        keywords.sort_by(|a, b| match b.frequency.cmp(&a.frequency) {
            Ordering::Equal => a.term.cmp(&b.term),
            other => other,
        });
        keywords.truncate(self.limit);

        Ok(keywords)
    }
}

impl std::fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordExtractor")
            .field("analyzer", &self.analyzer.name())
            .field("limit", &self.limit)
            .finish()
    }
}

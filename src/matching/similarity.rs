//! Pairwise TF-IDF text similarity.
//!
//! Each comparison builds its own two-document vector space: the vocabulary
//! is the union of both texts' terms (capped to the most frequent
//! `max_features`), weights are length-normalized term frequency times
//! smoothed inverse document frequency, and the score is the cosine of the
//! two vectors. No corpus statistics survive between calls, so the score of
//! one candidate never depends on another candidate's resume.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use ahash::AHashMap;
use log::warn;

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::error::Result;

/// Default vocabulary cap for one comparison.
pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// TF-IDF vectorizer over pre-analyzed documents.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Maximum vocabulary size.
    max_features: usize,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("max_features", &self.max_features)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a vectorizer keeping at most `max_features` terms.
    pub fn new(max_features: usize) -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            max_features,
        }
    }

    /// Fit the vectorizer on tokenized documents.
    ///
    /// Terms are ranked by total frequency across all documents (ties by
    /// term) and the top `max_features` are kept. Indices follow term order,
    /// which keeps vector layout independent of hash iteration order.
    pub fn fit(&mut self, documents: &[Vec<String>]) {
        self.n_documents = documents.len();
        let mut term_frequency: AHashMap<&str, usize> = AHashMap::new();
        let mut document_frequency: AHashMap<&str, usize> = AHashMap::new();

        for doc in documents {
            let mut seen = HashSet::new();
            for token in doc {
                *term_frequency.entry(token.as_str()).or_insert(0) += 1;
                if seen.insert(token.as_str()) {
                    *document_frequency.entry(token.as_str()).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(&str, usize)> = term_frequency.into_iter().collect();
        ranked.sort_by(|a, b| match b.1.cmp(&a.1) {
            Ordering::Equal => a.0.cmp(b.0),
            other => other,
        });
        ranked.truncate(self.max_features);

        let mut terms: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort_unstable();

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (idx, term) in terms.into_iter().enumerate() {
            let df = document_frequency.get(term).copied().unwrap_or(0);
            // IDF = ln((N + 1) / (df + 1)) + 1
            idf.push(((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term.to_string(), idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
    }

    /// Transform a tokenized document into a TF-IDF feature vector.
    pub fn transform(&self, tokens: &[String]) -> Vec<f64> {
        let mut tf = vec![0.0; self.vocabulary.len()];

        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        // Normalize by document length
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for count in &mut tf {
                *count /= doc_length;
            }
        }

        for (idx, weight) in tf.iter_mut().enumerate() {
            *weight *= self.idf[idx];
        }

        tf
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Cosine similarity of two equally sized vectors, clamped to [0, 1].
///
/// Zero-norm or mismatched inputs yield `0.0`. For identical inputs the
/// squared norms and the dot product are accumulated identically, so the
/// result is exactly `1.0`.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denominator = (norm_a * norm_b).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }

    let similarity = dot / denominator;
    if similarity.is_nan() {
        0.0
    } else {
        similarity.clamp(0.0, 1.0)
    }
}

/// Scores the similarity of two free-text blobs in [0, 1].
#[derive(Clone)]
pub struct TextSimilarityScorer {
    analyzer: Arc<dyn Analyzer>,
    max_features: usize,
}

impl TextSimilarityScorer {
    /// Create a scorer over the English analyzer with the default vocabulary cap.
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(EnglishAnalyzer::new()?)))
    }

    /// Create a scorer over a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        TextSimilarityScorer {
            analyzer,
            max_features: DEFAULT_MAX_FEATURES,
        }
    }

    /// Override the vocabulary cap.
    pub fn max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Similarity of `text_a` and `text_b`; analysis failures count as no information.
    pub fn similarity(&self, text_a: &str, text_b: &str) -> f64 {
        match self.try_similarity(text_a, text_b) {
            Ok(score) => score,
            Err(e) => {
                warn!(
                    "text analysis failed in analyzer '{}', scoring similarity as 0.0: {e}",
                    self.analyzer.name()
                );
                0.0
            }
        }
    }

    /// Similarity of `text_a` and `text_b`, surfacing analyzer errors.
    pub fn try_similarity(&self, text_a: &str, text_b: &str) -> Result<f64> {
        if text_a.trim().is_empty() || text_b.trim().is_empty() {
            return Ok(0.0);
        }

        let documents = vec![self.analyzer.terms(text_a)?, self.analyzer.terms(text_b)?];
        if documents.iter().any(|doc| doc.is_empty()) {
            return Ok(0.0);
        }

        let mut vectorizer = TfIdfVectorizer::new(self.max_features);
        vectorizer.fit(&documents);

        let a = vectorizer.transform(&documents[0]);
        let b = vectorizer.transform(&documents[1]);

        Ok(cosine_similarity(&a, &b))
    }
}

impl std::fmt::Debug for TextSimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextSimilarityScorer")
            .field("analyzer", &self.analyzer.name())
            .field("max_features", &self.max_features)
            .finish()
    }
}

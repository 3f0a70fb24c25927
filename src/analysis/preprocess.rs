//! Text preprocessing for downstream NLP.
//!
//! Cleans free text into the normalized terms other tools consume:
//! lowercased words of three or more characters, stop words removed, each
//! reduced to its stem.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::error::Result;

/// Minimum length of a processed token, in characters.
pub const MIN_PROCESSED_CHARS: usize = 3;

/// The outcome of preprocessing one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessedText {
    pub original_text: String,
    pub processed_tokens: Vec<String>,
    pub token_count: usize,
}

/// Runs text through a stemming English analyzer.
pub struct TextPreprocessor {
    analyzer: Arc<dyn Analyzer>,
}

impl TextPreprocessor {
    pub fn new() -> Result<Self> {
        let analyzer = EnglishAnalyzer::builder()
            .stemming(true)
            .min_term_chars(MIN_PROCESSED_CHARS)
            .build()?;
        Ok(Self::with_analyzer(Arc::new(analyzer)))
    }

    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        TextPreprocessor { analyzer }
    }

    /// Tokens keep their order of appearance, duplicates included.
    pub fn process(&self, text: &str) -> Result<PreprocessedText> {
        let processed_tokens = self.analyzer.terms(text)?;
        Ok(PreprocessedText {
            original_text: text.to_string(),
            token_count: processed_tokens.len(),
            processed_tokens,
        })
    }
}

impl std::fmt::Debug for TextPreprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPreprocessor")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process() {
        let preprocessor = TextPreprocessor::new().unwrap();
        let result = preprocessor
            .process("Senior engineer: designed APIs and led 3 engineering teams.")
            .unwrap();

        assert_eq!(
            result.processed_tokens,
            vec!["senior", "engin", "design", "api", "led", "engin", "team"]
        );
        assert_eq!(result.token_count, 7);
        assert!(result.original_text.starts_with("Senior engineer"));
    }

    #[test]
    fn test_short_words_and_stop_words_are_dropped() {
        let preprocessor = TextPreprocessor::new().unwrap();
        let result = preprocessor.process("we do ML on Rust at it").unwrap();
        assert_eq!(result.processed_tokens, vec!["rust"]);
        assert_eq!(result.token_count, 1);
    }

    #[test]
    fn test_process_empty_text() {
        let preprocessor = TextPreprocessor::new().unwrap();
        let result = preprocessor.process("").unwrap();
        assert!(result.processed_tokens.is_empty());
        assert_eq!(result.token_count, 0);
    }
}

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LengthFilter, LowercaseFilter, StemFilter, StopFilter};
use crate::analysis::tokenizer::regex::{MULTI_CHAR_WORD_PATTERN, RegexTokenizer};
use crate::error::Result;

/// The tokenizer already drops single characters.
const TOKENIZER_MIN_CHARS: usize = 2;

/// English analysis: words of two or more characters, lowercased, English
/// stop words removed. This is the default analyzer for text similarity.
///
/// [`EnglishAnalyzer::builder`] adds Porter stemming and a stricter
/// minimum term length, as used by text preprocessing.
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
    stemming: bool,
}

/// Options for an [`EnglishAnalyzer`].
#[derive(Debug, Clone, Copy)]
pub struct EnglishAnalyzerBuilder {
    stemming: bool,
    min_term_chars: usize,
}

impl EnglishAnalyzerBuilder {
    /// Reduce every term to its Porter stem.
    pub fn stemming(mut self, stemming: bool) -> Self {
        self.stemming = stemming;
        self
    }

    /// Drop terms shorter than `min_chars` characters, checked before stemming.
    pub fn min_term_chars(mut self, min_chars: usize) -> Self {
        self.min_term_chars = min_chars;
        self
    }

    pub fn build(self) -> Result<EnglishAnalyzer> {
        let tokenizer = Arc::new(RegexTokenizer::with_pattern(MULTI_CHAR_WORD_PATTERN)?);
        let mut analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::default()));

        if self.min_term_chars > TOKENIZER_MIN_CHARS {
            analyzer = analyzer.add_filter(Arc::new(LengthFilter::new(self.min_term_chars)));
        }
        if self.stemming {
            analyzer = analyzer.add_filter(Arc::new(StemFilter::new()));
        }

        Ok(EnglishAnalyzer {
            inner: analyzer.with_name("english"),
            stemming: self.stemming,
        })
    }
}

impl EnglishAnalyzer {
    /// The default analyzer: no stemming, terms of two or more characters.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> EnglishAnalyzerBuilder {
        EnglishAnalyzerBuilder {
            stemming: false,
            min_term_chars: TOKENIZER_MIN_CHARS,
        }
    }

    pub fn is_stemming(&self) -> bool {
        self.stemming
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new().expect("English analyzer should be creatable with default settings")
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        if self.stemming {
            "english_stemmed"
        } else {
            "english"
        }
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

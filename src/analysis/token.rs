//! Token types for text analysis.
//!
//! A [`Token`] is the unit flowing through the analysis pipeline: the
//! tokenizer produces them, filters rewrite or drop them, and the similarity
//! scorer counts their text.
//!
//! # Examples
//!
//! ```
//! use talentrank::analysis::token::Token;
//!
//! let token = Token::new("Engineering").with_text("engineering");
//! assert_eq!(token.text, "engineering");
//! assert_eq!(token.char_len(), 11);
//! ```

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,
}

/// A stream of tokens produced by a tokenizer or filter.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

impl Token {
    /// Create a new token with the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token { text: text.into() }
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the token text.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

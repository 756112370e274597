//! Text processing: tokenization, stop words, TF-IDF, similarity.
//!
//! This module turns item metadata into sparse numeric vectors and
//! provides similarity lookups over them:
//! - [`WordTokenizer`]: word tokens of two or more alphanumeric characters
//! - [`stopwords::StopWordsFilter`]: English stop word removal
//! - [`vectorize::TfidfVectorizer`]: TF-IDF weighting with L2-normalized rows
//! - [`similarity::SimilarityMatrix`]: pairwise cosine similarity and
//!   nearest-neighbor queries
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::vectorize::TfidfVectorizer;
//! use recomendar::text::similarity::SimilarityMatrix;
//!
//! let docs = vec!["horror midnight ghost", "comedy wedding ghost"];
//! let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
//! let vectors = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
//!
//! let matrix = SimilarityMatrix::build(&vectors).expect("build should succeed");
//! assert!(matrix.get(0, 1) > 0.0); // shared "ghost" term
//! ```

pub mod similarity;
pub mod stopwords;
pub mod vectorize;

use crate::error::Result;

/// Tokenization strategy used by the vectorizer.
///
/// Implementations must be deterministic: the same text always yields the
/// same token sequence.
pub trait Tokenizer {
    /// Split text into tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be tokenized.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Word tokenizer keeping alphanumeric runs of length two or more.
///
/// This mirrors the common `\b\w\w+\b` token pattern: punctuation is a
/// separator and single-character tokens are dropped.
///
/// # Examples
///
/// ```
/// use recomendar::text::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
/// let tokens = tokenizer.tokenize("A road-trip turns hostile!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["road", "trip", "turns", "hostile"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.chars().count() >= 2)
            .map(ToString::to_string)
            .collect();
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer_splits_on_punctuation() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer
            .tokenize("ghosts, guards & gates")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["ghosts", "guards", "gates"]);
    }

    #[test]
    fn test_word_tokenizer_drops_single_chars() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer
            .tokenize("a I x of it")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["of", "it"]);
    }

    #[test]
    fn test_word_tokenizer_keeps_digits() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer
            .tokenize("blade 2049 runner")
            .expect("tokenize should succeed");
        assert_eq!(tokens, vec!["blade", "2049", "runner"]);
    }

    #[test]
    fn test_word_tokenizer_empty_text() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("   ").expect("tokenize should succeed");
        assert!(tokens.is_empty());
    }
}

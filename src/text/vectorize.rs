//! TF-IDF vectorization of text documents.
//!
//! Converts a document collection into L2-normalized TF-IDF rows so that
//! cosine similarity between documents reduces to a dot product.
//!
//! **Weighting** uses the smoothed form:
//! ```text
//! tfidf(t, d) = tf(t, d) × idf(t)
//! idf(t) = ln((1 + N) / (1 + df(t))) + 1
//! where N = total documents, df(t) = documents containing term t
//! ```
//! The vocabulary is ordered lexicographically, so the same document
//! collection always produces the same term indexing across runs.
//!
//! # Examples
//!
//! ```
//! use recomendar::text::vectorize::TfidfVectorizer;
//!
//! let docs = vec!["horror midnight ghost", "comedy wedding"];
//! let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
//!
//! let vectors = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
//! assert_eq!(vectors.len(), 2);
//! assert_eq!(vectors[0].len(), vectorizer.vocabulary_size());
//! ```

use crate::error::{RecomendarError, Result};
use crate::text::stopwords::StopWordsFilter;
use crate::text::{Tokenizer, WordTokenizer};
use std::collections::{BTreeSet, HashMap, HashSet};

/// TF-IDF vectorizer with a fixed, lexicographically ordered vocabulary.
///
/// Fitting and transforming are deterministic: the same documents always
/// yield the same vocabulary and identical vectors. The vocabulary is
/// never recomputed per query.
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    stop_words: Option<StopWordsFilter>,
    lowercase: bool,
    /// Term → column index, indices follow lexicographic term order
    vocabulary: HashMap<String, usize>,
    /// Terms in index order
    terms: Vec<String>,
    /// Inverse document frequency per term
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Create a new vectorizer with a [`WordTokenizer`], lowercasing
    /// enabled and no stop word filtering.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer::new()),
            stop_words: None,
            lowercase: true,
            vocabulary: HashMap::new(),
            terms: Vec::new(),
            idf: Vec::new(),
        }
    }

    /// Use English stop words (removes common words like "the", "and", "is").
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Use custom stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words.iter().copied()));
        self
    }

    /// Set whether to convert tokens to lowercase.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Tokenize, lowercase and stop-word-filter one document.
    fn process(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;
        let tokens = tokens
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .filter(|t| {
                self.stop_words
                    .as_ref()
                    .map_or(true, |sw| !sw.is_stop_word(t))
            })
            .collect();
        Ok(tokens)
    }

    /// Learn the vocabulary and IDF weights from documents.
    ///
    /// # Errors
    ///
    /// Returns an error if `documents` is empty or if no term survives
    /// tokenization and stop word removal (a degenerate vocabulary would
    /// make every downstream similarity query meaningless).
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(RecomendarError::empty_input("documents for fit"));
        }

        let n_docs = documents.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut all_terms: BTreeSet<String> = BTreeSet::new();

        for doc in documents {
            let tokens = self.process(doc.as_ref())?;
            let unique: HashSet<String> = tokens.into_iter().collect();
            for term in unique {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
                all_terms.insert(term);
            }
        }

        if all_terms.is_empty() {
            return Err(RecomendarError::Other(
                "vocabulary is empty after tokenization and stop word removal".to_string(),
            ));
        }

        // BTreeSet iteration gives the lexicographic index order.
        self.terms = all_terms.into_iter().collect();
        self.vocabulary = self
            .terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        self.idf = self
            .terms
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0);
                ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0
            })
            .collect();

        Ok(())
    }

    /// Transform documents into L2-normalized TF-IDF rows against the
    /// fitted vocabulary. Terms outside the vocabulary are ignored; a
    /// document with no known terms yields an all-zero row.
    ///
    /// # Errors
    ///
    /// Returns an error if `documents` is empty or `fit` has not been
    /// called.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Vec<f64>>> {
        if documents.is_empty() {
            return Err(RecomendarError::empty_input("documents for transform"));
        }
        if self.vocabulary.is_empty() {
            return Err(RecomendarError::Other(
                "vocabulary is empty, call fit() first".to_string(),
            ));
        }

        let vocab_size = self.terms.len();
        let mut rows = Vec::with_capacity(documents.len());

        for doc in documents {
            let mut row = vec![0.0; vocab_size];
            for token in self.process(doc.as_ref())? {
                if let Some(&idx) = self.vocabulary.get(&token) {
                    row[idx] += 1.0;
                }
            }
            for (idx, value) in row.iter_mut().enumerate() {
                *value *= self.idf[idx];
            }

            let norm: f64 = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for value in &mut row {
                    *value /= norm;
                }
            }
            rows.push(row);
        }

        Ok(rows)
    }

    /// Fit on documents, then transform them.
    ///
    /// # Errors
    ///
    /// Propagates any [`fit`](Self::fit) or [`transform`](Self::transform)
    /// failure.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<Vec<f64>>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// The learned term → index mapping.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Terms in index (lexicographic) order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// IDF weight per term, in index order.
    #[must_use]
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Size of the learned vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;

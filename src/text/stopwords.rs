//! Stop words filtering for text preprocessing.
//!
//! Stop words are common words (like "the", "is", "at") that carry little
//! semantic meaning and are removed before vocabulary construction so they
//! never become TF-IDF features.
//!
//! # Examples
//!
//! ```
//! use recomendar::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//! assert!(filter.is_stop_word("the"));
//! assert!(!filter.is_stop_word("ghost"));
//! ```

use std::collections::HashSet;

/// Common English stop words, based on the NLTK/scikit-learn lists.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "couldn", "did", "didn", "do", "does", "doesn",
    "doing", "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn",
    "has", "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself",
    "just", "me", "more", "most", "mustn", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out",
    "over", "own", "same", "shan", "she", "should", "shouldn", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn",
    "we", "were", "weren", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "won", "would", "wouldn", "you", "your", "yours", "yourself", "yourselves",
];

/// Stop words filter with O(1) case-insensitive membership checks.
///
/// # Examples
///
/// ```
/// use recomendar::text::stopwords::StopWordsFilter;
///
/// let filter = StopWordsFilter::english();
/// let tokens = vec!["the", "lone", "guard"];
/// let kept: Vec<&str> = tokens.into_iter().filter(|t| !filter.is_stop_word(t)).collect();
/// assert_eq!(kept, vec!["lone", "guard"]);
///
/// let custom = StopWordsFilter::new(["movie", "film"]);
/// assert!(custom.is_stop_word("Movie"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Stored in lowercase for case-insensitive matching
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from custom stop words (matched case-insensitively).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        Self { stop_words }
    }

    /// Create a filter with the default English stop word list.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// True when `token` is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(&token.to_lowercase())
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// True when the filter holds no stop words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;

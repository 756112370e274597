//! Sentiment polarity scoring of free-text mood descriptions.
//!
//! The recommendation engine only depends on the *sign* of the polarity,
//! via the [`MoodAnalyzer`] trait, so any deterministic scorer can be
//! substituted. The bundled [`LexiconAnalyzer`] is a weighted-lexicon
//! scorer with a single negation rule, in the style of pattern/TextBlob
//! lexicon sentiment.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::mood::{LexiconAnalyzer, Mood, MoodAnalyzer};
//!
//! let analyzer = LexiconAnalyzer::new();
//!
//! assert!(analyzer.polarity("I feel great today") > 0.0);
//! assert!(analyzer.polarity("this was a terrible week") < 0.0);
//! assert_eq!(analyzer.polarity("the sky is a sky"), 0.0);
//! assert_eq!(Mood::from_polarity(0.4), Mood::Positive);
//! ```

use std::collections::HashMap;

/// Sentiment polarity scorer.
///
/// Implementations must be deterministic and return values in [-1, 1].
/// Empty or whitespace-only text must score exactly 0.0.
pub trait MoodAnalyzer {
    /// Polarity of `text`: negative for negative sentiment, positive for
    /// positive, 0.0 for neutral.
    fn polarity(&self, text: &str) -> f64;
}

/// Coarse mood classification derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    /// Polarity strictly above zero
    Positive,
    /// Polarity strictly below zero
    Negative,
    /// Polarity exactly zero
    Neutral,
}

impl Mood {
    /// Classify a polarity score by its sign.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::mood::Mood;
    ///
    /// assert_eq!(Mood::from_polarity(0.7), Mood::Positive);
    /// assert_eq!(Mood::from_polarity(-0.1), Mood::Negative);
    /// assert_eq!(Mood::from_polarity(0.0), Mood::Neutral);
    /// ```
    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Mood::Positive
        } else if polarity < 0.0 {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }
}

/// Sentiment-bearing words with hand-tuned weights in [-1, 1].
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("amazing", 0.8),
    ("awesome", 0.9),
    ("best", 0.9),
    ("calm", 0.4),
    ("cheerful", 0.7),
    ("delighted", 0.9),
    ("energetic", 0.5),
    ("excellent", 1.0),
    ("excited", 0.7),
    ("fantastic", 0.9),
    ("fun", 0.6),
    ("glad", 0.6),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("joyful", 0.9),
    ("love", 0.8),
    ("lovely", 0.8),
    ("nice", 0.6),
    ("optimistic", 0.6),
    ("relaxed", 0.4),
    ("thrilled", 0.9),
    ("upbeat", 0.6),
    ("wonderful", 0.9),
    // negative
    ("angry", -0.7),
    ("anxious", -0.5),
    ("awful", -1.0),
    ("bad", -0.7),
    ("bored", -0.4),
    ("depressed", -0.9),
    ("disappointed", -0.6),
    ("down", -0.4),
    ("dreadful", -0.9),
    ("exhausted", -0.5),
    ("gloomy", -0.6),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("lonely", -0.6),
    ("miserable", -0.9),
    ("sad", -0.6),
    ("stressed", -0.6),
    ("terrible", -1.0),
    ("tired", -0.3),
    ("upset", -0.6),
    ("worried", -0.5),
    ("worst", -1.0),
];

/// Tokens that flip and damp the following sentiment word.
const NEGATORS: &[&str] = &["no", "not", "never", "neither", "nobody", "nothing", "hardly"];

/// Deterministic weighted-lexicon polarity scorer.
///
/// Scoring rule: tokenize on non-alphabetic characters, lowercase, look
/// each token up in the lexicon and average the matched weights. A
/// negator directly before a sentiment word multiplies its weight by
/// -0.5 (flip and damp), so "not good" reads mildly negative. The mean
/// is clamped to [-1, 1]. Text with no lexicon hits is neutral (0.0).
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: HashMap<&'static str, f64>,
}

impl LexiconAnalyzer {
    /// Create an analyzer with the built-in lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    /// Classify text by the sign of its polarity.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::mood::{LexiconAnalyzer, Mood};
    ///
    /// let analyzer = LexiconAnalyzer::new();
    /// assert_eq!(analyzer.describe("feeling wonderful"), Mood::Positive);
    /// ```
    #[must_use]
    pub fn describe(&self, text: &str) -> Mood {
        Mood::from_polarity(self.polarity(text))
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphabetic())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();

        let mut sum = 0.0;
        let mut hits = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            if let Some(&weight) = self.lexicon.get(token.as_str()) {
                let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
                sum += if negated { weight * -0.5 } else { weight };
                hits += 1;
            }
        }

        if hits == 0 {
            return 0.0;
        }

        (sum / hits as f64).clamp(-1.0, 1.0)
    }
}

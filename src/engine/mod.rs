//! Recommendation engine: filter by category and score, order by mood.
//!
//! [`Recommender`] is the single handle object constructed once at
//! startup. Construction fits the TF-IDF model and builds the similarity
//! matrix over the catalog; both are immutable afterwards, so the handle
//! can be shared across readers. Recommendation itself is a pure function
//! of the catalog and the request: category substring match, score
//! threshold, then mood-polarity ordering. The similarity matrix backs
//! [`Recommender::similar_titles`] only and is never consulted while
//! ranking.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::catalog::{Catalog, Item};
//! use recomendar::engine::{Recommender, RecommendRequest, Recommendations};
//!
//! let catalog = Catalog::from_items(vec![
//!     Item::new("Nightshift", "Horror", "A lone guard hears footsteps", 8.0),
//!     Item::new("Sunrise", "Comedy", "Two strangers share a taxi", 7.8),
//!     Item::new("Duel", "Horror", "A road trip turns hostile", 8.5),
//! ]).expect("catalog should build");
//!
//! let recommender = Recommender::new(catalog).expect("engine should build");
//! let request = RecommendRequest::new()
//!     .with_category("Horror")
//!     .with_min_score(8.0)
//!     .with_mood("I feel great");
//!
//! match recommender.recommend(&request) {
//!     Recommendations::Ranked(picks) => {
//!         assert_eq!(picks[0].title, "Duel"); // positive mood: best first
//!     }
//!     Recommendations::NoMatch { .. } => unreachable!(),
//! }
//! ```

use crate::catalog::Catalog;
use crate::error::Result;
use crate::mood::{LexiconAnalyzer, MoodAnalyzer};
use crate::text::similarity::SimilarityMatrix;
use crate::text::vectorize::TfidfVectorizer;

/// Default number of items returned by [`Recommender::recommend`].
pub const DEFAULT_LIMIT: usize = 5;

/// Parameters of one recommendation request.
///
/// All filters are optional; an absent category or score bound filters
/// nothing, an absent mood keeps catalog order.
///
/// # Examples
///
/// ```
/// use recomendar::engine::RecommendRequest;
///
/// let request = RecommendRequest::new()
///     .with_category("Drama")
///     .with_min_score(8.2)
///     .with_limit(3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecommendRequest {
    category: Option<String>,
    mood: Option<String>,
    min_score: Option<f64>,
    limit: Option<usize>,
}

impl RecommendRequest {
    /// Create a request with no filters and the default limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only items whose category contains this value,
    /// case-insensitively.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Free-text mood whose polarity sign picks the sort direction.
    #[must_use]
    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// Keep only items with `score >= min_score`.
    #[must_use]
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Maximum number of items to return (default 5).
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One recommended item.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Item title
    pub title: String,
    /// Item category label
    pub category: String,
    /// Item quality rating
    pub score: f64,
}

/// Outcome of a recommendation request.
///
/// An empty result is a normal outcome the caller must handle, distinct
/// from an error: it carries the filters that excluded every item so the
/// caller can prompt for different ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendations {
    /// At least one item matched, in the chosen order.
    Ranked(Vec<Recommendation>),
    /// The filters excluded every item.
    NoMatch {
        /// Requested category filter, if any
        category: Option<String>,
        /// Requested score bound, if any
        min_score: Option<f64>,
    },
}

impl Recommendations {
    /// True when no item matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Recommendations::NoMatch { .. })
    }

    /// The ranked items, or an empty slice when nothing matched.
    #[must_use]
    pub fn ranked(&self) -> &[Recommendation] {
        match self {
            Recommendations::Ranked(items) => items,
            Recommendations::NoMatch { .. } => &[],
        }
    }
}

/// Recommendation engine handle.
///
/// Owns the catalog snapshot, the fitted TF-IDF model, the precomputed
/// similarity matrix and the mood analyzer. Everything is immutable after
/// construction; [`Recommender::recommend`] takes `&self`, performs no
/// I/O and is idempotent.
#[allow(missing_debug_implementations)]
pub struct Recommender {
    catalog: Catalog,
    vectorizer: TfidfVectorizer,
    similarity: SimilarityMatrix,
    analyzer: Box<dyn MoodAnalyzer>,
}

impl Recommender {
    /// Build the engine over a catalog snapshot.
    ///
    /// Fits the vectorizer on every item's `combined_text` (English stop
    /// words removed) and precomputes the pairwise similarity matrix.
    ///
    /// # Errors
    ///
    /// Fails fast when the catalog text yields a degenerate (empty)
    /// vocabulary, rather than deferring the failure to the first
    /// neighbor query.
    pub fn new(catalog: Catalog) -> Result<Self> {
        let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
        let vectors = vectorizer.fit_transform(&catalog.combined_texts())?;
        let similarity = SimilarityMatrix::build(&vectors)?;

        Ok(Self {
            catalog,
            vectorizer,
            similarity,
            analyzer: Box::new(LexiconAnalyzer::new()),
        })
    }

    /// Replace the mood analyzer. The engine only reads the sign of the
    /// polarity, so any deterministic scorer is a drop-in.
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: Box<dyn MoodAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Recommend items matching the request filters, ordered by the
    /// request's mood polarity.
    ///
    /// 1. Category filter: case-insensitive substring match on the item
    ///    category; items with an empty category never match a non-empty
    ///    filter.
    /// 2. Score filter: `score >= min_score`.
    /// 3. Empty set → [`Recommendations::NoMatch`].
    /// 4. Mood ordering: positive polarity sorts by score descending,
    ///    negative ascending, neutral keeps catalog order. The sort is
    ///    stable, so ties keep catalog order too.
    /// 5. Truncation to the request limit.
    #[must_use]
    pub fn recommend(&self, request: &RecommendRequest) -> Recommendations {
        let category_filter = request
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase);

        let mut matched: Vec<&crate::catalog::Item> = self
            .catalog
            .items()
            .iter()
            .filter(|item| match &category_filter {
                Some(wanted) => item.category.to_lowercase().contains(wanted),
                None => true,
            })
            .filter(|item| match request.min_score {
                Some(bound) => item.score >= bound,
                None => true,
            })
            .collect();

        if matched.is_empty() {
            return Recommendations::NoMatch {
                category: request.category.clone(),
                min_score: request.min_score,
            };
        }

        if let Some(mood) = request.mood.as_deref() {
            let polarity = self.analyzer.polarity(mood);
            if polarity > 0.0 {
                matched.sort_by(|a, b| b.score.total_cmp(&a.score));
            } else if polarity < 0.0 {
                matched.sort_by(|a, b| a.score.total_cmp(&b.score));
            }
            // Neutral mood keeps catalog order.
        }

        let limit = request.limit.unwrap_or(DEFAULT_LIMIT);
        let picks = matched
            .into_iter()
            .take(limit)
            .map(|item| Recommendation {
                title: item.title.clone(),
                category: item.category.clone(),
                score: item.score,
            })
            .collect();

        Recommendations::Ranked(picks)
    }

    /// The `k` catalog items whose combined text is most similar to the
    /// item at `index`, excluding the item itself.
    ///
    /// Content-based nearest-neighbor lookup over the precomputed
    /// matrix. Kept separate from [`Recommender::recommend`], which
    /// ranks on metadata only.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds.
    pub fn similar_titles(&self, index: usize, k: usize) -> Result<Vec<(usize, f64)>> {
        self.similarity.neighbors(index, k)
    }

    /// The catalog snapshot this engine serves.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The fitted TF-IDF model.
    #[must_use]
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// The precomputed similarity matrix.
    #[must_use]
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Polarity the engine's analyzer assigns to a mood text.
    #[must_use]
    pub fn mood_polarity(&self, mood: &str) -> f64 {
        self.analyzer.polarity(mood)
    }
}

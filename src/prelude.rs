//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::catalog::{Catalog, Item};
pub use crate::engine::{
    RecommendRequest, Recommendation, Recommendations, Recommender, DEFAULT_LIMIT,
};
pub use crate::error::{RecomendarError, Result};
pub use crate::mood::{LexiconAnalyzer, Mood, MoodAnalyzer};
pub use crate::text::similarity::{cosine_similarity, SimilarityMatrix};
pub use crate::text::vectorize::TfidfVectorizer;

//! Recomendar: mood-aware, content-based movie recommendation in pure Rust.
//!
//! Recomendar serves ranked picks from a fixed catalog: items are filtered
//! by category and a minimum quality score, then ordered by the sentiment
//! polarity of a free-text mood description. A TF-IDF model and pairwise
//! cosine similarity matrix are built once over the catalog at startup and
//! back content-based nearest-neighbor lookups.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
//!
//! let catalog = Catalog::from_items(vec![
//!     Item::new("Nightshift", "Horror", "A lone guard hears footsteps", 8.0),
//!     Item::new("Sunrise", "Comedy", "Two strangers share a taxi", 7.8),
//!     Item::new("Duel", "Horror", "A road trip turns hostile", 8.5),
//! ]).unwrap();
//!
//! let recommender = Recommender::new(catalog).unwrap();
//!
//! let request = RecommendRequest::new()
//!     .with_category("Horror")
//!     .with_mood("I feel great");
//!
//! let picks = recommender.recommend(&request);
//! assert_eq!(picks.ranked()[0].title, "Duel"); // positive mood: best score first
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Item catalog, loaded once from CSV and read-only after
//! - [`text`]: Tokenization, stop words, TF-IDF and cosine similarity
//! - [`mood`]: Sentiment polarity scoring of mood text
//! - [`engine`]: The filter/rank recommendation engine
//! - [`error`]: Error types

pub mod catalog;
pub mod engine;
pub mod error;
pub mod mood;
pub mod prelude;
pub mod text;

pub use error::{RecomendarError, Result};

//! Catalog of recommendable items.
//!
//! The catalog is loaded once from a CSV source (or built from fixtures)
//! and is read-only for the lifetime of the process. Each item derives a
//! `combined_text` field from its category and overview at construction;
//! that field feeds the TF-IDF vectorizer.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::catalog::{Catalog, Item};
//!
//! let catalog = Catalog::from_items(vec![
//!     Item::new("Nightshift", "Horror", "A lone guard hears footsteps", 8.0),
//!     Item::new("Sunrise", "Comedy", "Two strangers share a taxi", 7.8),
//! ]).expect("catalog should build");
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.items()[0].title, "Nightshift");
//! ```

use crate::error::{RecomendarError, Result};
use serde::Deserialize;
use std::path::Path;

/// One catalog entry.
///
/// `combined_text` is derived from `category` and `overview` once at
/// construction and never recomputed. Missing metadata is represented as
/// an empty string, not an option, matching the CSV source semantics.
#[derive(Debug, Clone)]
pub struct Item {
    /// Display title. Duplicates are permitted and treated independently.
    pub title: String,
    /// Genre label, possibly empty.
    pub category: String,
    /// Free-text description, possibly empty.
    pub overview: String,
    /// Quality rating. Not validated against any band at load time.
    pub score: f64,
    /// `"{category} {overview}"`, the text the vectorizer sees.
    pub combined_text: String,
}

impl Item {
    /// Create an item, deriving `combined_text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::catalog::Item;
    ///
    /// let item = Item::new("Duel", "Horror", "A road trip turns hostile", 8.5);
    /// assert_eq!(item.combined_text, "Horror A road trip turns hostile");
    /// ```
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        overview: impl Into<String>,
        score: f64,
    ) -> Self {
        let title = title.into();
        let category = category.into();
        let overview = overview.into();
        let combined_text = format!("{category} {overview}");
        Self {
            title,
            category,
            overview,
            score,
            combined_text,
        }
    }
}

/// Raw CSV row. Category and overview default to empty when the column
/// value is missing.
#[derive(Debug, Deserialize)]
struct RawRecord {
    title: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    overview: String,
    score: f64,
}

/// Fixed, ordered collection of items. Immutable after construction.
///
/// # Examples
///
/// ```
/// use recomendar::catalog::{Catalog, Item};
///
/// let catalog = Catalog::from_items(vec![
///     Item::new("Duel", "Horror", "A road trip turns hostile", 8.5),
/// ]).expect("catalog should build");
/// assert!(!catalog.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Load a catalog from a CSV file with headers
    /// `title,category,overview,score`.
    ///
    /// Missing `category`/`overview` values become empty strings. Row
    /// order is preserved and becomes the catalog iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`RecomendarError::CatalogLoad`] if the file cannot be
    /// opened, a row fails to parse, or the file contains zero data rows.
    /// A zero-row catalog is rejected here rather than later: a
    /// vocabulary fitted on nothing makes every downstream query
    /// meaningless.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| RecomendarError::catalog_load(&shown, format!("{e}")))?;

        let mut items = Vec::new();
        for (row, record) in reader.deserialize::<RawRecord>().enumerate() {
            let record = record.map_err(|e| {
                RecomendarError::catalog_load(&shown, format!("row {}: {e}", row + 2))
            })?;
            items.push(Item::new(
                record.title,
                record.category,
                record.overview,
                record.score,
            ));
        }

        if items.is_empty() {
            return Err(RecomendarError::catalog_load(&shown, "no data rows"));
        }

        Ok(Self { items })
    }

    /// Build a catalog from pre-constructed items (fixtures, tests).
    ///
    /// # Errors
    ///
    /// Returns an error if `items` is empty, for the same reason
    /// [`Catalog::from_csv`] rejects a zero-row file.
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(RecomendarError::empty_input("catalog items"));
        }
        Ok(Self { items })
    }

    /// All items in load order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog holds no items. Unreachable through the
    /// public constructors, which reject empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The `combined_text` of every item, in catalog order. This is the
    /// document collection the vectorizer fits on.
    #[must_use]
    pub fn combined_texts(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.combined_text.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

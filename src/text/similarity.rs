//! Cosine similarity and the precomputed similarity matrix.
//!
//! The matrix is built once from the catalog's TF-IDF vectors and is
//! immutable afterwards. It backs nearest-neighbor lookups
//! ([`SimilarityMatrix::neighbors`]); the recommendation engine's
//! filter/rank path does not consult it.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::similarity::SimilarityMatrix;
//!
//! let vectors = vec![
//!     vec![1.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![1.0, 1.0],
//! ];
//! let matrix = SimilarityMatrix::build(&vectors).expect("build should succeed");
//!
//! let neighbors = matrix.neighbors(0, 1).expect("neighbors should succeed");
//! assert_eq!(neighbors[0].0, 2); // [1,1] is closer to [1,0] than [0,1]
//! ```

use crate::error::{RecomendarError, Result};

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 when either vector has zero norm; with non-negative
/// features (TF-IDF) the result lies in [0, 1].
///
/// # Errors
///
/// Returns an error if the vectors are empty or differ in length.
///
/// # Examples
///
/// ```
/// use recomendar::text::similarity::cosine_similarity;
///
/// let sim = cosine_similarity(&[1.0, 2.0], &[2.0, 4.0]).expect("cosine should succeed");
/// assert!((sim - 1.0).abs() < 1e-9);
/// ```
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RecomendarError::dimension_mismatch("len", a.len(), b.len()));
    }
    if a.is_empty() {
        return Err(RecomendarError::empty_input("vectors"));
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0); // Zero vector is orthogonal to everything
    }

    Ok(dot / (norm_a * norm_b))
}

/// Dense pairwise cosine similarity matrix over a document collection.
///
/// Symmetric, with the diagonal fixed at 1.0. Built once; no mutation
/// path exists afterwards, so shared references are safe across readers.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    /// Row-major n×n values
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the matrix from one vector per document.
    ///
    /// Only the upper triangle is computed; the lower half is mirrored.
    ///
    /// # Errors
    ///
    /// Returns an error if `vectors` is empty or rows differ in length.
    pub fn build(vectors: &[Vec<f64>]) -> Result<Self> {
        if vectors.is_empty() {
            return Err(RecomendarError::empty_input("vectors for similarity matrix"));
        }

        let n = vectors.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let sim = cosine_similarity(&vectors[i], &vectors[j])?;
                data[i * n + j] = sim;
                data[j * n + i] = sim;
            }
        }

        Ok(Self { n, data })
    }

    /// Similarity between documents `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "similarity index out of bounds");
        self.data[i * self.n + j]
    }

    /// The `k` documents most similar to `index`, excluding itself.
    ///
    /// Sorted by descending similarity; ties break by ascending document
    /// index. Returns fewer than `k` entries when the collection is small.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::similarity::SimilarityMatrix;
    ///
    /// let vectors = vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]];
    /// let matrix = SimilarityMatrix::build(&vectors).expect("build should succeed");
    ///
    /// let neighbors = matrix.neighbors(0, 2).expect("neighbors should succeed");
    /// assert_eq!(neighbors[0], (1, 1.0)); // identical vector first
    /// ```
    pub fn neighbors(&self, index: usize, k: usize) -> Result<Vec<(usize, f64)>> {
        if index >= self.n {
            return Err(RecomendarError::index_out_of_bounds(index, self.n));
        }

        let mut scored: Vec<(usize, f64)> = (0..self.n)
            .filter(|&j| j != index)
            .map(|j| (j, self.get(index, j)))
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(k);

        Ok(scored)
    }

    /// Number of documents the matrix covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// True when the matrix covers no documents. Unreachable through
    /// [`SimilarityMatrix::build`], which rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;

//! # VectorStore
//!
//! Flat (brute-force) nearest-neighbor index over review vectors.
//!
//! This module pairs every review with its TF-IDF vector and answers
//! k-nearest-neighbor queries by scanning all stored vectors and ranking them
//! by squared Euclidean distance. Exact search is the right trade for a
//! personal review corpus: the index holds tens of vectors, not millions, so
//! a linear scan beats any approximate structure on both accuracy and setup
//! cost.
//!
//! ## Responsibilities
//! - **Indexing**: Embeds each review through a shared [`FittedVocabulary`]
//!   and stores (review, vector) pairs in insertion order.
//! - **Search**: Returns the `k` closest reviews, ascending by distance, ties
//!   broken by insertion order (first inserted wins).
//! - **Association**: Maps each hit back to the review text it came from.
//!
//! The index is built once per corpus and never mutated; there is no
//! deletion, no incremental insert and no persistence.
//!
//! ## Quick Example
//! ```rust
//! use shelfwise::vector_store::ReviewIndex;
//! use shelfwise::vectorizer::TfIdfVectorizer;
//!
//! # fn main() -> Result<(), shelfwise::error::ShelfwiseError> {
//! let reviews = vec![
//!     "A haunting ghost story".to_string(),
//!     "A dry legal thriller".to_string(),
//! ];
//! let vocabulary = TfIdfVectorizer::fit(&reviews)?;
//! let index = ReviewIndex::build(&vocabulary, &reviews)?;
//! let hits = index.search(&vocabulary.embed("a haunting story"), 1)?;
//! assert_eq!(hits[0].index, 0);
//! # Ok(()) }
//! ```

use tracing::{debug, warn};

use crate::error::ShelfwiseError;
use crate::vectorizer::FittedVocabulary;

/// One search hit: the review's position in the corpus and its squared
/// Euclidean distance from the query vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Position of the review in the indexed corpus.
    pub index: usize,
    /// Squared Euclidean distance to the query (smaller is closer).
    pub distance: f32,
}

struct IndexEntry {
    review: String,
    vector: Vec<f32>,
}

/// Brute-force Euclidean index over (review, vector) pairs.
///
/// Build it once from a corpus and a fitted vocabulary, then query it any
/// number of times. Query vectors must come from the **same**
/// [`FittedVocabulary`], otherwise distances are meaningless; the index can
/// only enforce that their dimensionality matches.
pub struct ReviewIndex {
    dimension: usize,
    entries: Vec<IndexEntry>,
}

impl ReviewIndex {
    /// Embed every review through `vocabulary` and store the pairs.
    ///
    /// # Parameters
    /// - `vocabulary`: The fitted vocabulary shared with query embedding.
    /// - `reviews`: Review texts, indexed by their position in this slice.
    ///
    /// # Errors
    /// - [`ShelfwiseError::Corpus`] if `reviews` is empty.
    pub fn build(
        vocabulary: &FittedVocabulary,
        reviews: &[String],
    ) -> Result<Self, ShelfwiseError> {
        if reviews.is_empty() {
            return Err(ShelfwiseError::Corpus(
                "cannot build an index over zero reviews".into(),
            ));
        }

        let entries = reviews
            .iter()
            .map(|review| IndexEntry {
                review: review.clone(),
                vector: vocabulary.embed(review),
            })
            .collect::<Vec<_>>();

        debug!(reviews = entries.len(), dimension = vocabulary.dimension(), "built review index");

        Ok(Self {
            dimension: vocabulary.dimension(),
            entries,
        })
    }

    /// Number of indexed reviews.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the index holds no reviews. Unreachable through
    /// [`build`](Self::build), which rejects an empty corpus.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored review text at `index`, if any.
    pub fn review(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.review.as_str())
    }

    /// Query the index for the `k` nearest reviews to `vector`.
    ///
    /// Results are ordered by non-decreasing squared Euclidean distance.
    /// Equidistant reviews keep their insertion order. A `k` larger than the
    /// index is clamped to the index size; `k = 0` returns nothing.
    ///
    /// # Errors
    /// - [`ShelfwiseError::DimensionMismatch`] if `vector.len()` differs from
    ///   the index dimensionality.
    pub fn search(&self, vector: &[f32], k: usize) -> Result<Vec<Neighbor>, ShelfwiseError> {
        if vector.len() != self.dimension {
            return Err(ShelfwiseError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }

        let k = if k > self.entries.len() {
            warn!(
                requested = k,
                available = self.entries.len(),
                "clamping neighbor count to index size"
            );
            self.entries.len()
        } else {
            k
        };

        let mut neighbors: Vec<Neighbor> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Neighbor {
                index,
                distance: squared_euclidean_distance(vector, &entry.vector),
            })
            .collect();

        // Stable sort keeps insertion order for equal distances.
        neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        neighbors.truncate(k);

        Ok(neighbors)
    }

    /// Convenience wrapper over [`search`](Self::search) that resolves each
    /// hit back to its review text.
    pub fn search_reviews(
        &self,
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<String>, ShelfwiseError> {
        let neighbors = self.search(vector, k)?;
        Ok(neighbors
            .into_iter()
            .map(|n| self.entries[n.index].review.clone())
            .collect())
    }
}

fn squared_euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(av, bv)| (av - bv) * (av - bv))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::TfIdfVectorizer;

    fn sample_reviews() -> Vec<String> {
        vec![
            "The joys of backpacking are immense".to_string(),
            "A moving story about human connection at a careful distance".to_string(),
            "An imaginative dystopian novel that unfolds too quickly".to_string(),
            "A classic love story woven through a sweeping world".to_string(),
        ]
    }

    fn build_index(reviews: &[String]) -> (FittedVocabulary, ReviewIndex) {
        let vocabulary = TfIdfVectorizer::fit(reviews).unwrap();
        let index = ReviewIndex::build(&vocabulary, reviews).unwrap();
        (vocabulary, index)
    }

    #[test]
    fn indexed_review_is_its_own_nearest_neighbor() {
        let reviews = sample_reviews();
        let (vocabulary, index) = build_index(&reviews);
        for (position, review) in reviews.iter().enumerate() {
            let hits = index.search(&vocabulary.embed(review), 1).unwrap();
            assert_eq!(hits[0].index, position);
            assert!(hits[0].distance.abs() < 1e-5);
        }
    }

    #[test]
    fn distances_are_non_decreasing() {
        let reviews = sample_reviews();
        let (vocabulary, index) = build_index(&reviews);
        let hits = index
            .search(&vocabulary.embed("a story about love"), reviews.len())
            .unwrap();
        for pair in hits.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn full_search_returns_every_review_once() {
        let reviews = sample_reviews();
        let (vocabulary, index) = build_index(&reviews);
        let hits = index
            .search(&vocabulary.embed("backpacking"), reviews.len())
            .unwrap();
        let mut seen: Vec<usize> = hits.iter().map(|n| n.index).collect();
        seen.sort();
        assert_eq!(seen, (0..reviews.len()).collect::<Vec<_>>());
    }

    #[test]
    fn identical_query_beats_a_dissimilar_review() {
        let reviews = vec![
            "An austere meditation on grief and memory".to_string(),
            "A slapstick space comedy full of puns".to_string(),
        ];
        let (vocabulary, index) = build_index(&reviews);
        let hits = index.search(&vocabulary.embed(&reviews[0]), 1).unwrap();
        assert_eq!(hits[0].index, 0);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let reviews = vec![
            "wholly unrelated chapter".to_string(),
            "wholly unrelated chapter".to_string(),
        ];
        let (vocabulary, index) = build_index(&reviews);
        let hits = index.search(&vocabulary.embed("something else"), 2).unwrap();
        assert_eq!(hits[0].index, 0);
        assert_eq!(hits[1].index, 1);
    }

    #[test]
    fn oversized_k_is_clamped() {
        let reviews = sample_reviews();
        let (vocabulary, index) = build_index(&reviews);
        let hits = index.search(&vocabulary.embed("love"), 100).unwrap();
        assert_eq!(hits.len(), reviews.len());
    }

    #[test]
    fn zero_k_returns_nothing() {
        let reviews = sample_reviews();
        let (vocabulary, index) = build_index(&reviews);
        let hits = index.search(&vocabulary.embed("love"), 0).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn mismatched_dimension_is_an_error() {
        let reviews = sample_reviews();
        let (_vocabulary, index) = build_index(&reviews);
        let result = index.search(&[0.0, 1.0], 1);
        assert!(matches!(
            result,
            Err(ShelfwiseError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn empty_corpus_cannot_be_indexed() {
        let reviews = sample_reviews();
        let (vocabulary, _index) = build_index(&reviews);
        let result = ReviewIndex::build(&vocabulary, &[]);
        assert!(matches!(result, Err(ShelfwiseError::Corpus(_))));
    }

    #[test]
    fn search_reviews_resolves_text() {
        let reviews = sample_reviews();
        let (vocabulary, index) = build_index(&reviews);
        let texts = index
            .search_reviews(&vocabulary.embed(&reviews[2]), 1)
            .unwrap();
        assert_eq!(texts, vec![reviews[2].clone()]);
    }
}

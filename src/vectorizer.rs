//! # TF-IDF vectorizer
//!
//! Converts review text into fixed-length numeric vectors using
//! term-frequency / inverse-document-frequency weighting. Fitting and
//! embedding are split into two pieces on purpose:
//!
//! - [`TfIdfVectorizer::fit`] runs **once** over the whole corpus and returns
//!   a [`FittedVocabulary`].
//! - [`FittedVocabulary::embed`] turns any text into a vector using that
//!   frozen vocabulary. Terms the corpus never saw contribute nothing.
//!
//! Because the vocabulary is an immutable value rather than shared mutable
//! state, every vector produced through the same `FittedVocabulary` shares
//! its dimensionality, and index vectors stay comparable with query vectors
//! for the lifetime of the artifact.
//!
//! ## Weighting
//!
//! Terms are lowercased alphanumeric runs of at least two characters.
//! Dimensions are assigned in lexicographic term order. For a corpus of `n`
//! documents, `idf(t) = ln((1 + n) / (1 + df(t))) + 1` where `df(t)` counts
//! the documents containing `t`. An embedded vector holds raw term count
//! times idf per dimension and is L2-normalized, except for the all-zero
//! vector which is left as-is.
//!
//! ## Quick Example
//! ```rust
//! use shelfwise::vectorizer::TfIdfVectorizer;
//!
//! # fn main() -> Result<(), shelfwise::error::ShelfwiseError> {
//! let corpus = vec![
//!     "a gripping mystery with a slow start".to_string(),
//!     "a tender romance set in wartime".to_string(),
//! ];
//! let vocabulary = TfIdfVectorizer::fit(&corpus)?;
//! let vector = vocabulary.embed("a gripping wartime romance");
//! assert_eq!(vector.len(), vocabulary.dimension());
//! # Ok(()) }
//! ```

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::ShelfwiseError;

/// Fits TF-IDF statistics over a review corpus.
///
/// This is a namespace for [`fit`](Self::fit); all state lives in the
/// returned [`FittedVocabulary`].
pub struct TfIdfVectorizer;

impl TfIdfVectorizer {
    /// Fit a vocabulary over `corpus` and compute idf weights.
    ///
    /// # Parameters
    /// - `corpus`: The full set of review texts. Must be non-empty and must
    ///   yield at least one term.
    ///
    /// # Returns
    /// A [`FittedVocabulary`] mapping each term to a dimension, with one idf
    /// weight per dimension.
    ///
    /// # Errors
    /// - [`ShelfwiseError::Corpus`] if `corpus` is empty.
    /// - [`ShelfwiseError::Corpus`] if no document yields a single term, since
    ///   zero-length vectors would make every downstream distance meaningless.
    pub fn fit(corpus: &[String]) -> Result<FittedVocabulary, ShelfwiseError> {
        if corpus.is_empty() {
            return Err(ShelfwiseError::Corpus("review corpus is empty".into()));
        }

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for review in corpus {
            let unique_terms: HashSet<String> = tokenize(review).into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(ShelfwiseError::Corpus(
                "corpus produced an empty vocabulary".into(),
            ));
        }

        let mut terms: Vec<String> = document_frequency.keys().cloned().collect();
        terms.sort();

        let document_count = corpus.len();
        let mut term_to_dimension = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (dimension, term) in terms.into_iter().enumerate() {
            let df = document_frequency[&term];
            let weight =
                ((1.0 + document_count as f32) / (1.0 + df as f32)).ln() + 1.0;
            idf.push(weight);
            term_to_dimension.insert(term, dimension);
        }

        debug!(
            documents = document_count,
            dimension = idf.len(),
            "fitted tf-idf vocabulary"
        );

        Ok(FittedVocabulary {
            term_to_dimension,
            idf,
        })
    }
}

/// Immutable vocabulary produced by a single [`TfIdfVectorizer::fit`] call.
///
/// Holds the term → dimension mapping and the per-dimension idf weights.
/// Pass it by reference into both index construction and query embedding so
/// both sides share one vector basis.
pub struct FittedVocabulary {
    term_to_dimension: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl FittedVocabulary {
    /// Number of dimensions, i.e. the vocabulary size discovered at fit time.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Embed one text into a vector of length [`dimension`](Self::dimension).
    ///
    /// Out-of-vocabulary terms are ignored. A text containing no known term
    /// embeds to the zero vector.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];

        let mut term_counts: HashMap<String, usize> = HashMap::new();
        for term in tokenize(text) {
            *term_counts.entry(term).or_insert(0) += 1;
        }

        for (term, count) in term_counts {
            if let Some(&dimension) = self.term_to_dimension.get(&term) {
                vector[dimension] = count as f32 * self.idf[dimension];
            }
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }
}

/// Lowercased alphanumeric runs of at least two characters.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(|token| token.to_lowercase())
        .collect()
}

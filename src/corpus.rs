//! Review corpus loading.
//!
//! A corpus is an ordered list of review strings; a review's identity is its
//! position in the list. Corpora are read from a YAML file (a plain list of
//! strings) or taken from the built-in seed set written by `shelfwise init`.

use std::{fs, path::Path};

use tracing::info;

use crate::error::ShelfwiseError;

/// The ordered set of past reviews the index is built over.
#[derive(Debug, Clone)]
pub struct ReviewCorpus {
    reviews: Vec<String>,
}

impl ReviewCorpus {
    /// Wrap an already-loaded list of reviews.
    pub fn from_reviews(reviews: Vec<String>) -> Self {
        Self { reviews }
    }

    /// Load a corpus from a YAML file containing a list of strings.
    ///
    /// # Errors
    /// - [`ShelfwiseError::Io`] if the file cannot be read.
    /// - [`ShelfwiseError::Config`] if the YAML is not a list of strings.
    pub fn load(path: &Path) -> Result<Self, ShelfwiseError> {
        info!("Loading reviews from: {}", path.display());
        let content = fs::read_to_string(path)?;
        let reviews: Vec<String> = serde_yaml::from_str(&content)?;
        Ok(Self { reviews })
    }

    /// The built-in starter corpus of eleven book reviews.
    pub fn seed() -> Self {
        let reviews = [
            "The appeal of backpacking travel is immense, even when the route wanders.",
            "A moving story about human connection written with a careful sense of distance.",
            "An imaginative dystopian novel, but the plot develops far too quickly.",
            "A classic love story weaving emotion through a grand, sweeping world.",
            "An epic seafaring adventure with a philosophical core.",
            "A captivating tale with a superb historical setting and a rich romance.",
            "Beautiful descriptions, but the plot is predictable.",
            "A detailed and moving work told through love and art.",
            "A fresh take on Greek mythology, though the pacing drags.",
            "A masterpiece that vividly portrays personal growth and a moving human figure.",
            "Yet another formulaic romantic utopia, this time set on a tropical island.",
        ];
        Self {
            reviews: reviews.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// The reviews in corpus order.
    pub fn reviews(&self) -> &[String] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn seed_corpus_is_populated() {
        let corpus = ReviewCorpus::seed();
        assert_eq!(corpus.len(), 11);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn load_reads_a_yaml_list() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
- "A quiet coming of age novel."
- "A loud thriller with no brakes."
"#
        )
        .unwrap();

        let corpus = ReviewCorpus::load(temp_file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.reviews()[0], "A quiet coming of age novel.");
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let result = ReviewCorpus::load(Path::new("non/existent/reviews.yaml"));
        assert!(matches!(result, Err(ShelfwiseError::Io(_))));
    }

    #[test]
    fn load_rejects_non_list_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"not: a list"#).unwrap();

        let result = ReviewCorpus::load(temp_file.path());
        assert!(matches!(result, Err(ShelfwiseError::Config(_))));
    }
}

//! # Shelfwise (library root)
//!
//! This crate provides the core plumbing for the **shelfwise** CLI and library:
//! - TF-IDF vectorization of review text (`vectorizer`).
//! - Exact nearest-neighbor retrieval over review vectors (`vector_store`).
//! - Rating prediction through an OpenAI-compatible API (`api`).
//! - Review corpus loading (`corpus`).
//! - CLI parsing (`commands`), configuration (`config`), prompt templates
//!   (`template`) and the shared error type (`error`).
//!
//! The prediction pipeline is three steps run once, in order, on one thread:
//!
//! 1. Fit a [`vectorizer::FittedVocabulary`] over the review corpus.
//! 2. Build a [`vector_store::ReviewIndex`] over the corpus vectors and
//!    search it with the embedded book description.
//! 3. Hand the retrieved reviews and the description to
//!    [`api::predict_rating`].
//!
//! The vocabulary is fit exactly once and passed by reference into both
//! indexing and query embedding, so index vectors and query vectors always
//! share one basis.
//!
//! ## Modules
//! - [`api`], [`commands`], [`config`], [`corpus`], [`error`], [`template`],
//!   [`vector_store`], [`vectorizer`]

use directories::ProjectDirs;

pub mod api;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod template;
pub mod vector_store;
pub mod vectorizer;

use crate::error::ShelfwiseError;

/// Return the per-platform configuration directory used by shelfwise.
///
/// This uses [`directories::ProjectDirs`] with the application triple
/// `("com", "awful-sec", "shelfwise")`, so you get the right place on each OS
/// (e.g., `~/.config/shelfwise` on Linux via XDG).
///
/// The directory is **not** created by this function; callers that need it
/// should create it with `fs::create_dir_all`.
///
/// # Errors
/// Returns an error if the platform configuration directory cannot be
/// determined (rare, but possible in heavily sandboxed environments).
///
/// # Examples
/// ```no_run
/// let cfg = shelfwise::config_dir().expect("has a config dir");
/// println!("config at {}", cfg.display());
/// ```
pub fn config_dir() -> Result<std::path::PathBuf, ShelfwiseError> {
    let proj_dirs = ProjectDirs::from("com", "awful-sec", "shelfwise")
        .ok_or_else(|| ShelfwiseError::Other("Unable to determine config directory".into()))?;
    let config_dir = proj_dirs.config_dir().to_path_buf();

    Ok(config_dir)
}

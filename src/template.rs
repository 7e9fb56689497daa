//! # Prompt template
//!
//! The rating prompt sent to the model is a single user turn assembled from
//! three configurable pieces: an intro line for the book description, a
//! header for the retrieved review context, and a closing instruction asking
//! for the 1-5 rating. Templates are stored per-user as YAML under the
//! application's configuration directory, inside a `templates/` subfolder:
//!
//! ```text
//! <config_dir>/templates/<name>.yaml
//! ```
//!
//! ## Minimal YAML example
//!
//! ```yaml
//! intro: "Here is a book I am thinking about reading:"
//! context_header: "Here are related reviews I have written in the past:"
//! instruction: "On a scale from 1 (lowest) to 5 (highest), how likely am I to enjoy this book? Explain your reasoning, then answer with the number only."
//! ```

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::ShelfwiseError;

/// A reusable rating-prompt template.
///
/// Instances are typically created by deserializing YAML files with
/// [`load_template`], or via [`Default`] when no template file exists.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PromptTemplate {
    /// Line introducing the book description.
    pub intro: String,

    /// Line introducing the retrieved review context.
    pub context_header: String,

    /// Closing instruction asking for the numeric rating.
    pub instruction: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            intro: "Here is a book I am thinking about reading:".to_string(),
            context_header: "Here are related reviews I have written in the past:"
                .to_string(),
            instruction: "On a scale from 1 (lowest) to 5 (highest), how likely am I \
                          to enjoy this book? Explain your reasoning, then answer with \
                          the number only."
                .to_string(),
        }
    }
}

impl PromptTemplate {
    /// Render the full prompt for one prediction.
    ///
    /// Reviews appear one per line in the order given. An empty review slice
    /// still renders a well-formed prompt whose context section is empty.
    pub fn render(&self, book_description: &str, related_reviews: &[String]) -> String {
        let context = related_reviews.join("\n");
        format!(
            "{}\n{}\n\n{}\n{}\n\n{}",
            self.intro, book_description, self.context_header, context, self.instruction
        )
    }
}

/// Load a prompt template by name from the user's config directory.
///
/// Resolves `<config_dir>/templates/<name>.yaml`, reads the file, and
/// deserializes into a [`PromptTemplate`].
///
/// ### Errors
/// Returns an error if the config directory cannot be determined, the file
/// cannot be read, or the YAML does not match the template shape.
pub fn load_template(name: &str) -> Result<PromptTemplate, ShelfwiseError> {
    let path = format!("templates/{}.yaml", name);
    let config_path = crate::config_dir()?.join(&path);

    tracing::info!("Loading template: {}", config_path.display());

    let content = fs::read_to_string(config_path)?;
    let template: PromptTemplate = serde_yaml::from_str(&content)?;
    Ok(template)
}

//! This module provides functionality for loading and handling the application's configuration.
//!
//! It defines the `ShelfwiseConfig` struct, which holds the configuration
//! parameters, and a `load_config` function to load the configuration from a
//! YAML file.
//!
//! # Examples
//!
//! Loading the configuration from a file:
//!
//! ```no_run
//! use shelfwise::config::{ShelfwiseConfig, load_config};
//!
//! let config_file_path = "/path/to/config.yaml";
//! let config: ShelfwiseConfig = load_config(config_file_path).unwrap();
//! println!("{:?}", config);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;

use tracing::debug;

use crate::error::ShelfwiseError;

/// Represents the application's configuration.
///
/// Everything the pipeline used to hard-code lives here instead: where the
/// reviews come from, which model rates them, how many neighbors to retrieve
/// and the sampling parameters for the remote call.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ShelfwiseConfig {
    /// The API key used to authenticate requests to the API.
    pub api_key: String,

    /// The base URL of the API.
    pub api_base: String,

    /// The name of the model asked to produce the rating.
    pub model: String,

    /// Upper bound on the model's response length, in tokens.
    pub response_max_tokens: u16,

    /// Sampling temperature for the rating request.
    pub temperature: f32,

    /// How many related reviews to retrieve per prediction.
    pub neighbor_count: usize,

    /// Optional path to a YAML reviews file. The built-in seed corpus is
    /// used when unset.
    pub reviews_path: Option<String>,
}

impl Default for ShelfwiseConfig {
    fn default() -> Self {
        Self {
            api_key: "CHANGEME".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            response_max_tokens: 2000,
            temperature: 0.7,
            neighbor_count: 2,
            reviews_path: None,
        }
    }
}

/// Loads the application's configuration from a YAML file.
///
/// # Parameters
///
/// - `file`: The path to the YAML configuration file.
///
/// # Returns
///
/// - `Ok(ShelfwiseConfig)`: The loaded configuration.
/// - `Err(ShelfwiseError)`: The file could not be read or the YAML did not
///   match the expected shape.
pub fn load_config(file: &str) -> Result<ShelfwiseConfig, ShelfwiseError> {
    debug!("Loading config from: {}", file);
    let content = fs::read_to_string(file)?;
    let config: ShelfwiseConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

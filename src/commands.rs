//! This module defines the command-line interface for the application using `clap`.
//!
//! It provides a `Cli` struct that represents the parsed command-line
//! arguments, and a `Commands` enum that represents the available subcommands
//! and their options.

use clap::{Parser, Subcommand};

/// Represents the parsed command-line arguments.
///
/// This struct is constructed by parsing the command-line arguments using `clap`.
/// It contains a `command` field that holds the parsed subcommand and its options.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, propagate_version = true, color = clap::ColorChoice::Always)]
pub struct Cli {
    /// The parsed subcommand and its options.
    #[command(subcommand)]
    pub command: Commands,
}

/// Represents the available subcommands and their options.
#[derive(Subcommand, Debug)]
#[command(about, long_about = None, color = clap::ColorChoice::Always)]
pub enum Commands {
    /// The 'predict' subcommand: rate one book description against the
    /// review corpus.
    ///
    /// If the description is not provided on the command line, a built-in
    /// sample description is used.
    #[clap(name = "predict", alias = "p")]
    Predict {
        /// The book description to rate. If not provided, a sample description is used.
        description: Option<String>,

        /// Override the configured number of related reviews to retrieve.
        #[arg(name = "neighbors", short = 'k')]
        neighbors: Option<usize>,

        /// Override the configured reviews file.
        #[arg(name = "reviews", short = 'r')]
        reviews: Option<String>,

        /// Name of the prompt template to load from the config directory.
        #[arg(name = "template", short = 't')]
        template: Option<String>,
    },

    /// The 'init' subcommand, which takes no arguments and is used for initialization.
    ///
    /// When invoked, this subcommand creates the config directory and writes
    /// a default configuration, seed reviews file and rating prompt template.
    Init,
}

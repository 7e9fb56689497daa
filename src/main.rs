//! Main module for the shelfwise CLI application.
//!
//! This module provides the main function and auxiliary functionality for
//! the CLI application. It handles command parsing, configuration loading,
//! and initialization, then runs the three-step prediction pipeline: fit the
//! vocabulary, retrieve related reviews, ask the model for a rating.
//!
//! # Examples
//!
//! Running the application with the `predict` command:
//!
//! ```sh
//! cargo run -- predict "A quiet novel about a lighthouse keeper."
//! shelfwise predict "A quiet novel about a lighthouse keeper." -k 3
//! ```
//!
//! Initializing the application's configuration, reviews and template:
//!
//! ```sh
//! cargo run -- init
//! shelfwise init
//! ```

use clap::Parser;
use crossterm::{
    ExecutableCommand,
    style::{Attribute, Color, SetAttribute, SetForegroundColor},
};
use once_cell::sync::OnceCell;
use std::{fs, io::stdout, path::Path, process::ExitCode};
use tracing::{debug, info};

use shelfwise::{
    api, commands, config, config_dir,
    corpus::ReviewCorpus,
    error::ShelfwiseError,
    template::{self, PromptTemplate},
    vector_store::ReviewIndex,
    vectorizer::TfIdfVectorizer,
};

static TRACING: OnceCell<()> = OnceCell::new();

/// Used when `predict` is invoked without a description.
const SAMPLE_BOOK_DESCRIPTION: &str = "The Beach by Alex Garland casts a critical eye on \
    backpacker culture, following travelers whose hunt for an untouched paradise lays bare \
    their selfishness and excess.";

fn main() -> ExitCode {
    TRACING.get_or_init(|| {
        tracing_subscriber::fmt::init();
    });
    let runtime = tokio::runtime::Runtime::new().expect("failed to start tokio runtime");
    match runtime.block_on(run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Report a pipeline failure on stderr, keyed by what actually went wrong.
fn report_error(err: &ShelfwiseError) {
    match err {
        ShelfwiseError::Corpus(_) => eprintln!("review corpus problem: {err}"),
        ShelfwiseError::DimensionMismatch { .. } => eprintln!("vector shape problem: {err}"),
        ShelfwiseError::RemoteService(_) | ShelfwiseError::EmptyResponse => {
            eprintln!("remote service problem: {err}")
        }
        _ => eprintln!("error: {err}"),
    }
}

/// Main asynchronous function of the shelfwise CLI application.
///
/// Loads configuration, parses command-line arguments, and executes the
/// appropriate command.
///
/// # Errors
///
/// Returns an error if there is an issue loading the configuration, reading
/// the review corpus, or executing the specified command.
async fn run() -> Result<(), ShelfwiseError> {
    let cli = commands::Cli::parse();

    match cli.command {
        commands::Commands::Predict {
            description,
            neighbors,
            reviews,
            template,
        } => {
            let config_path = config_dir()?.join("config.yaml");
            debug!("Loading config from: {}", config_path.display());
            let mut app_config = config::load_config(
                config_path
                    .to_str()
                    .ok_or("config path is not valid UTF-8")?,
            )?;
            debug!("Config loaded: {:?}", app_config);

            if let Some(k) = neighbors {
                app_config.neighbor_count = k;
            }
            if let Some(path) = reviews {
                app_config.reviews_path = Some(path);
            }

            let template = match template {
                Some(name) => template::load_template(&name)?,
                None => template::load_template("rating_prompt").unwrap_or_default(),
            };

            let description =
                description.unwrap_or_else(|| SAMPLE_BOOK_DESCRIPTION.to_string());

            predict(&app_config, &template, &description).await?;
        }
        commands::Commands::Init => {
            debug!("Initializing configuration");
            init()?;
        }
    }

    Ok(())
}

/// Run the prediction pipeline once: fit, index, retrieve, predict.
async fn predict(
    app_config: &config::ShelfwiseConfig,
    template: &PromptTemplate,
    description: &str,
) -> Result<(), ShelfwiseError> {
    let corpus = match &app_config.reviews_path {
        Some(path) => ReviewCorpus::load(Path::new(path))?,
        None => ReviewCorpus::seed(),
    };

    println!("Indexing {} reviews...", corpus.len());
    let vocabulary = TfIdfVectorizer::fit(corpus.reviews())?;
    let index = ReviewIndex::build(&vocabulary, corpus.reviews())?;
    println!("Index ready ({} dimensions).", vocabulary.dimension());

    println!("Retrieving related reviews...");
    let query = vocabulary.embed(description);
    let related = index.search_reviews(&query, app_config.neighbor_count)?;
    for review in &related {
        println!("  - {review}");
    }

    println!("Asking {} for a rating...", app_config.model);
    let rating = api::predict_rating(app_config, template, description, &related).await?;
    print_rating(&rating)?;

    Ok(())
}

/// Print the model's answer in bold blue, then restore the terminal.
fn print_rating(rating: &str) -> Result<(), ShelfwiseError> {
    let mut stdout = stdout();
    stdout.execute(SetForegroundColor(Color::Blue))?;
    stdout.execute(SetAttribute(Attribute::Bold))?;
    println!("Predicted rating: {rating}");
    stdout.execute(SetAttribute(Attribute::Reset))?;
    stdout.execute(SetForegroundColor(Color::Reset))?;
    Ok(())
}

/// Initializes the application's configuration, seed reviews and template.
///
/// Creates the necessary directories and files for the application's
/// configuration, the starter review corpus, and the default rating prompt
/// template. Everything is stored in YAML format.
///
/// # Errors
///
/// Returns an error if there is an issue creating the directories or files,
/// or serializing the defaults to YAML.
fn init() -> Result<(), ShelfwiseError> {
    let config_dir = config_dir()?;
    let templates_dir = config_dir.join("templates");
    info!("Creating template config directory: {}", templates_dir.display());
    fs::create_dir_all(&templates_dir)?;

    let template_path = templates_dir.join("rating_prompt.yaml");
    info!("Creating template file: {}", template_path.display());
    let template_yaml = serde_yaml::to_string(&PromptTemplate::default())?;
    fs::write(template_path, template_yaml)?;

    let reviews_path = config_dir.join("reviews.yaml");
    info!("Creating reviews file: {}", reviews_path.display());
    let reviews_yaml = serde_yaml::to_string(ReviewCorpus::seed().reviews())?;
    fs::write(&reviews_path, reviews_yaml)?;

    let config_path = config_dir.join("config.yaml");
    info!("Creating config file: {}", config_path.display());
    let app_config = config::ShelfwiseConfig {
        reviews_path: Some(reviews_path.to_string_lossy().into_owned()),
        ..Default::default()
    };
    let config_yaml = serde_yaml::to_string(&app_config)?;
    fs::write(config_path, config_yaml)?;

    Ok(())
}

//! Command-line interface wiring for physician-notetaker.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod analyze;
pub mod batch;
pub mod classify;
pub mod lexicon;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Doctor-patient transcript analysis", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => analyze::run(args, settings).await,
            Commands::Classify(args) => classify::run(args, settings).await,
            Commands::Batch(args) => batch::run(args, settings).await,
            Commands::Lexicon(args) => lexicon::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze one transcript and print the structured result.
    Analyze(analyze::Args),
    /// Classify sentiment and intent of a single utterance.
    Classify(classify::Args),
    /// Analyze every transcript in a directory.
    Batch(batch::Args),
    /// Export the active lexicon as JSON.
    Lexicon(lexicon::Args),
    /// Serve the JSON API.
    Serve(serve::Args),
}

/// Overrides shared by commands that run the pipeline.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TuningArgs {
    /// Number of keywords to report.
    #[arg(long, allow_negative_numbers = true)]
    pub top_k: Option<i64>,
    /// Minimum entity confidence.
    #[arg(long)]
    pub floor: Option<f64>,
}

impl TuningArgs {
    pub fn apply(&self, settings: Settings) -> Result<Settings> {
        Ok(settings.with_overrides(self.top_k, self.floor)?)
    }
}

/// Render a value as JSON, pretty unless `compact`.
pub fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

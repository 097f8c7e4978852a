//! CLI entry-point for classifying a single utterance.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{cli::to_json, config::Settings, nlp::Pipeline};

/// Args for the `classify` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Patient utterance to classify.
    #[arg(long)]
    pub text: String,
    /// Emit single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let pipeline = Pipeline::new(settings)?;
    let result = pipeline.classify_text(&args.text)?;
    println!("{}", to_json(&result, args.compact)?);
    Ok(())
}

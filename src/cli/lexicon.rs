//! CLI entry-point for exporting the active lexicon bundle.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{cli::to_json, config::Settings, nlp::lexicon::Lexicon};

/// Args for the `lexicon` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Destination file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let lexicon = Lexicon::load(settings.lexicon_path.as_deref())?;
    let json = to_json(lexicon.bundle(), false)?;
    match args.out {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), entries = lexicon.entries().len(), "exported lexicon");
        }
        None => println!("{json}"),
    }
    Ok(())
}

//! CLI entry-point for analyzing a single transcript.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tokio::io::AsyncReadExt;
use tracing::{info, instrument};

use crate::{
    cli::{to_json, TuningArgs},
    config::Settings,
    nlp::{self, Pipeline},
};

/// Args for the `analyze` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Transcript file, or `-` for stdin.
    #[arg(long)]
    pub transcript: PathBuf,
    #[command(flatten)]
    pub tuning: TuningArgs,
    /// Write the JSON result here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Emit single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let settings = args.tuning.apply(settings)?;
    let pipeline = Pipeline::new(settings)?;
    let transcript = read_transcript(&args.transcript).await?;

    let result = pipeline.analyze_parallel(&transcript).await?;
    let json = to_json(&result, args.compact)?;
    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote analysis");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Read a transcript from a path, or stdin for `-`.
pub async fn read_transcript(path: &Path) -> Result<String> {
    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("reading transcript from stdin")?;
        buf
    } else {
        tokio::fs::read(path)
            .await
            .with_context(|| format!("reading transcript {}", path.display()))?
    };
    Ok(nlp::decode_transcript(bytes)?)
}

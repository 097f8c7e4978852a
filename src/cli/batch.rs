//! CLI entry-point for analyzing a directory of transcripts.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};
use walkdir::WalkDir;

use crate::{
    cli::{analyze::read_transcript, to_json, TuningArgs},
    config::Settings,
    nlp::Pipeline,
};

/// Args for the `batch` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Directory searched recursively for `*.txt` transcripts.
    #[arg(long)]
    pub dir: PathBuf,
    /// Transcripts analyzed at once.
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,
    #[command(flatten)]
    pub tuning: TuningArgs,
}

/// `*.txt` files under `dir`, sorted by path.
pub fn transcript_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(%err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .collect();
    files.sort();
    files
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    if args.concurrency == 0 {
        bail!("--concurrency must be at least 1");
    }
    let settings = args.tuning.apply(settings)?;
    let files = transcript_files(&args.dir);
    if files.is_empty() {
        warn!(dir = %args.dir.display(), "no transcripts found");
        return Ok(());
    }
    tokio::fs::create_dir_all(&settings.outputs_dir)
        .await
        .with_context(|| format!("creating {}", settings.outputs_dir.display()))?;

    let pipeline = Pipeline::new(settings)?;
    info!(files = files.len(), concurrency = args.concurrency, "analyzing transcripts");

    let written = stream::iter(files)
        .map(|path| {
            let pipeline = pipeline.clone();
            async move {
                let transcript = read_transcript(&path).await?;
                let result = pipeline
                    .analyze_parallel(&transcript)
                    .await
                    .with_context(|| format!("analyzing {}", path.display()))?;
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "transcript".to_string());
                let out = pipeline.settings().join_output(format!("{stem}.json"));
                tokio::fs::write(&out, to_json(&result, false)?)
                    .await
                    .with_context(|| format!("writing {}", out.display()))?;
                info!(input = %path.display(), output = %out.display(), "wrote analysis");
                Ok::<_, anyhow::Error>(out)
            }
        })
        .buffer_unordered(args.concurrency)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    info!(written = written.len(), "batch complete");
    Ok(())
}

//! Error taxonomy shared by the analysis pipeline.

use thiserror::Error;

/// Failures surfaced by pipeline construction or an analysis call.
///
/// Missing evidence is never an error: components fall back to sentinel
/// values instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Empty or non-text transcript.
    #[error("invalid transcript: {0}")]
    Input(String),

    /// Missing or malformed lexicon data. Fatal at startup.
    #[error("failed to load lexicon: {0}")]
    LexiconLoad(String),

    /// Invalid option value.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A parallel analysis worker panicked or was cancelled.
    #[error("analysis worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

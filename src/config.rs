//! Runtime configuration utilities for physician-notetaker.

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{AnalysisError, Result},
    nlp::segment::SpeakerLabels,
};

/// Default minimum confidence an entity needs to survive extraction.
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.35;
/// Default number of keywords reported.
pub const DEFAULT_TOP_K: usize = 10;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Optional JSON lexicon bundle replacing the built-in vocabulary.
    pub lexicon_path: Option<PathBuf>,
    /// Entities scoring below this are dropped.
    pub confidence_floor: f64,
    /// Maximum keywords returned per transcript.
    pub top_k: usize,
    /// Merge scores from a registered ML scorer when one is available.
    pub ml_scorer: bool,
    /// Speaker labels attributed to the clinician.
    pub doctor_labels: Vec<String>,
    /// Speaker labels attributed to the patient.
    pub patient_labels: Vec<String>,
    /// Root folder for analysis outputs written by `batch`.
    pub outputs_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            confidence_floor: DEFAULT_CONFIDENCE_FLOOR,
            top_k: DEFAULT_TOP_K,
            ml_scorer: false,
            doctor_labels: vec!["Doctor".into(), "Physician".into()],
            patient_labels: vec!["Patient".into()],
            outputs_dir: PathBuf::from("./outputs"),
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let lexicon_path = lookup("LEXICON_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let confidence_floor = match lookup("ENTITY_CONFIDENCE_FLOOR") {
            Some(raw) => parse_floor(&raw)?,
            None => defaults.confidence_floor,
        };
        let top_k = match lookup("KEYWORD_TOP_K") {
            Some(raw) => parse_top_k(&raw)?,
            None => defaults.top_k,
        };
        let ml_scorer = match lookup("ML_SCORER_ENABLED") {
            Some(raw) => parse_flag("ML_SCORER_ENABLED", &raw)?,
            None => defaults.ml_scorer,
        };
        let doctor_labels = match lookup("DOCTOR_LABELS") {
            Some(raw) => parse_labels("DOCTOR_LABELS", &raw)?,
            None => defaults.doctor_labels,
        };
        let patient_labels = match lookup("PATIENT_LABELS") {
            Some(raw) => parse_labels("PATIENT_LABELS", &raw)?,
            None => defaults.patient_labels,
        };
        let outputs_dir = lookup("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.outputs_dir);

        let settings = Self {
            lexicon_path,
            confidence_floor,
            top_k,
            ml_scorer,
            doctor_labels,
            patient_labels,
            outputs_dir,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line overrides on top of the resolved settings.
    pub fn with_overrides(mut self, top_k: Option<i64>, floor: Option<f64>) -> Result<Self> {
        if let Some(top_k) = top_k {
            self.top_k = checked_top_k(top_k)?;
        }
        if let Some(floor) = floor {
            self.confidence_floor = floor;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject option values the pipeline cannot honour.
    pub fn validate(&self) -> Result<()> {
        if !self.confidence_floor.is_finite() || !(0.0..=1.0).contains(&self.confidence_floor) {
            return Err(AnalysisError::Configuration(format!(
                "confidence floor must lie in [0, 1], got {}",
                self.confidence_floor
            )));
        }
        if self.doctor_labels.is_empty() || self.patient_labels.is_empty() {
            return Err(AnalysisError::Configuration(
                "speaker label lists must not be empty".into(),
            ));
        }
        let overlap = self.doctor_labels.iter().find(|d| {
            self.patient_labels
                .iter()
                .any(|p| p.trim().eq_ignore_ascii_case(d.trim()))
        });
        if let Some(label) = overlap {
            return Err(AnalysisError::Configuration(format!(
                "label {label:?} is assigned to both doctor and patient"
            )));
        }
        Ok(())
    }

    /// Speaker labels handed to the turn segmenter.
    pub fn speaker_labels(&self) -> SpeakerLabels {
        SpeakerLabels::new(&self.doctor_labels, &self.patient_labels)
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}

fn parse_floor(raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        AnalysisError::Configuration(format!("ENTITY_CONFIDENCE_FLOOR is not a number: {raw:?}"))
    })
}

fn parse_top_k(raw: &str) -> Result<usize> {
    let value = raw.trim().parse::<i64>().map_err(|_| {
        AnalysisError::Configuration(format!("KEYWORD_TOP_K is not an integer: {raw:?}"))
    })?;
    checked_top_k(value)
}

fn checked_top_k(value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| AnalysisError::Configuration(format!("top_k must be >= 0, got {value}")))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AnalysisError::Configuration(format!(
            "{key} expects a boolean, got {other:?}"
        ))),
    }
}

fn parse_labels(key: &str, raw: &str) -> Result<Vec<String>> {
    let labels: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if labels.is_empty() {
        return Err(AnalysisError::Configuration(format!(
            "{key} must list at least one label"
        )));
    }
    Ok(labels)
}

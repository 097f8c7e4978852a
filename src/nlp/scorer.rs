//! Pluggable statistical scorer merged into the rule-based components.

use std::sync::Arc;

use tracing::warn;

use crate::{
    config::Settings,
    nlp::types::{Category, Intent, Sentiment},
};

/// Candidate entity proposed by a scorer, offsets relative to the turn text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntity {
    pub category: Category,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
}

/// Additive per-category scores for one utterance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCard {
    pub sentiment: Vec<(Sentiment, f64)>,
    pub intent: Vec<(Intent, f64)>,
}

/// Trait for statistical scorers. Both hooks default to contributing nothing.
pub trait Scorer: Send + Sync {
    fn name(&self) -> &str;

    fn entities(&self, _text: &str) -> Vec<ScoredEntity> {
        Vec::new()
    }

    fn classify(&self, _text: &str) -> ScoreCard {
        ScoreCard::default()
    }
}

/// Resolve the configured scorer. No backend ships with the crate, so an
/// enabled flag without a registered scorer degrades to rules only.
pub fn load_scorer(settings: &Settings) -> Option<Arc<dyn Scorer>> {
    if settings.ml_scorer {
        warn!("ML_SCORER_ENABLED is set but no scorer backend is registered; using rules only");
    }
    None
}

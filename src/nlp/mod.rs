//! Transcript analysis orchestration layer.

pub mod classify;
pub mod features;
pub mod keywords;
pub mod lexicon;
pub mod ner;
pub mod scorer;
pub mod segment;
pub mod soap;
pub mod summarize;
pub mod types;

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    config::Settings,
    error::{AnalysisError, Result},
};

use self::{
    lexicon::Lexicon,
    scorer::Scorer,
    segment::SpeakerLabels,
    types::{AnalysisResult, ClassificationResult, Entity, Keyword, Speaker, Turn},
};

/// Configured analysis pipeline. Cheap to clone; the lexicon and scorer are
/// shared read-only across calls and worker tasks.
#[derive(Clone)]
pub struct Pipeline {
    lexicon: Arc<Lexicon>,
    settings: Settings,
    labels: SpeakerLabels,
    scorer: Option<Arc<dyn Scorer>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("settings", &self.settings)
            .field("labels", &self.labels)
            .field("scorer", &self.scorer.as_ref().map(|s| s.name().to_string()))
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Validate settings and load the configured lexicon.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let lexicon = Lexicon::load(settings.lexicon_path.as_deref())?;
        let scorer = scorer::load_scorer(&settings);
        Ok(Self {
            labels: settings.speaker_labels(),
            lexicon,
            settings,
            scorer,
        })
    }

    /// Build around an already compiled lexicon.
    pub fn with_lexicon(settings: Settings, lexicon: Arc<Lexicon>) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            labels: settings.speaker_labels(),
            lexicon,
            settings,
            scorer: None,
        })
    }

    /// Merge a statistical scorer into extraction and classification.
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn segment(&self, transcript: &str) -> Vec<Turn> {
        segment::segment(transcript, &self.labels)
    }

    /// Classify a free-standing utterance as if spoken by the patient.
    pub fn classify_text(&self, text: &str) -> Result<ClassificationResult> {
        check_transcript(text)?;
        let turn = Turn::new(Speaker::Patient, features::normalize_text(text), 0);
        Ok(classify::classify(&turn, &self.lexicon, self.scorer.as_deref()))
    }

    /// Run the full pipeline on the calling thread.
    #[instrument(skip_all, fields(bytes = transcript.len()))]
    pub fn analyze(&self, transcript: &str) -> Result<AnalysisResult> {
        check_transcript(transcript)?;
        let turns = self.segment(transcript);
        let scorer = self.scorer.as_deref();
        let entities =
            ner::extract_entities(&turns, &self.lexicon, self.settings.confidence_floor, scorer);
        let classifications = classify::classify_turns(&turns, &self.lexicon, scorer);
        let keywords = keywords::extract_keywords(&turns, &self.lexicon, self.settings.top_k);
        Ok(self.finish(&turns, entities, classifications, keywords))
    }

    /// Run extraction, classification, and keyword ranking as separate
    /// blocking workers over the same turns, then assemble.
    #[instrument(skip_all, fields(bytes = transcript.len()))]
    pub async fn analyze_parallel(&self, transcript: &str) -> Result<AnalysisResult> {
        check_transcript(transcript)?;
        let turns: Arc<[Turn]> = self.segment(transcript).into();

        let entities = {
            let (turns, lexicon, scorer) = (turns.clone(), self.lexicon.clone(), self.scorer.clone());
            let floor = self.settings.confidence_floor;
            tokio::task::spawn_blocking(move || {
                ner::extract_entities(&turns, &lexicon, floor, scorer.as_deref())
            })
        };
        let classifications = {
            let (turns, lexicon, scorer) = (turns.clone(), self.lexicon.clone(), self.scorer.clone());
            tokio::task::spawn_blocking(move || {
                classify::classify_turns(&turns, &lexicon, scorer.as_deref())
            })
        };
        let keywords = {
            let (turns, lexicon) = (turns.clone(), self.lexicon.clone());
            let top_k = self.settings.top_k;
            tokio::task::spawn_blocking(move || keywords::extract_keywords(&turns, &lexicon, top_k))
        };

        let (entities, classifications, keywords) =
            tokio::try_join!(entities, classifications, keywords)?;
        Ok(self.finish(&turns, entities, classifications, keywords))
    }

    fn finish(
        &self,
        turns: &[Turn],
        entities: Vec<Entity>,
        classifications: Vec<ClassificationResult>,
        keywords: Vec<Keyword>,
    ) -> AnalysisResult {
        let summary = summarize::summarize(turns, &entities, &self.lexicon);
        let soap_note = soap::assemble(turns, &entities, &classifications, &summary, &self.lexicon);
        let overall_sentiment = classify::overall_sentiment(&classifications);
        let intent_summary = classify::intent_summary(&classifications);
        info!(
            turns = turns.len(),
            entities = entities.len(),
            keywords = keywords.len(),
            overall = ?overall_sentiment.sentiment,
            "analysis complete"
        );
        AnalysisResult {
            entities,
            structured_summary: summary,
            keywords,
            sentiment_intent: classifications,
            overall_sentiment,
            intent_summary,
            soap_note,
            narrative: summarize::narrative(turns),
        }
    }
}

/// Decode raw transcript bytes, rejecting anything that is not UTF-8 text.
pub fn decode_transcript(bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes)
        .map_err(|err| AnalysisError::Input(format!("transcript is not UTF-8: {err}")))?;
    check_transcript(&text)?;
    Ok(text)
}

/// Reject input that is empty or not plain text.
pub fn check_transcript(transcript: &str) -> Result<()> {
    if transcript.trim().is_empty() {
        return Err(AnalysisError::Input("transcript is empty".into()));
    }
    if transcript
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
    {
        return Err(AnalysisError::Input(
            "transcript contains control characters".into(),
        ));
    }
    Ok(())
}

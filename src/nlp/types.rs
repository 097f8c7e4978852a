//! Shared data model for the transcript analysis pipeline.

use serde::{Deserialize, Serialize};

/// Placeholder reported for any field without supporting evidence.
pub const NOT_MENTIONED: &str = "Not mentioned";

/// Speaker attribution for a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    Doctor,
    Patient,
    Unknown,
}

/// One contiguous utterance attributed to a single speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub index: usize,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>, index: usize) -> Self {
        Self {
            speaker,
            text: text.into(),
            index,
        }
    }

    pub fn is_patient(&self) -> bool {
        self.speaker == Speaker::Patient
    }

    pub fn is_doctor(&self) -> bool {
        self.speaker == Speaker::Doctor
    }
}

/// Clinical entity categories recognised by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Symptom,
    Diagnosis,
    Treatment,
    Prognosis,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Symptom,
        Category::Diagnosis,
        Category::Treatment,
        Category::Prognosis,
    ];
}

/// A patient turn where an entity was found above the confidence floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub turn: usize,
    pub surface: String,
}

/// Extracted clinical entity, deduplicated by category and lower-cased text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub category: Category,
    /// Canonical label from the lexicon, original case kept.
    pub text: String,
    /// Surface form matched on the source turn.
    pub surface: String,
    pub source_turn: usize,
    pub confidence: f64,
    pub mentions: Vec<Mention>,
}

/// Emotional framing of a patient utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Anxious,
    Neutral,
    Reassured,
}

impl Sentiment {
    /// Tie-break order, highest clinical priority first.
    pub const PRIORITY: [Sentiment; 3] = [Sentiment::Anxious, Sentiment::Reassured, Sentiment::Neutral];

    pub fn rank(self) -> usize {
        match self {
            Sentiment::Anxious => 0,
            Sentiment::Reassured => 1,
            Sentiment::Neutral => 2,
        }
    }
}

/// What the patient is trying to achieve with an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "Seeking reassurance")]
    SeekingReassurance,
    #[serde(rename = "Reporting symptoms")]
    ReportingSymptoms,
    #[serde(rename = "Expressing concern")]
    ExpressingConcern,
    #[serde(rename = "Asking questions")]
    AskingQuestions,
    #[serde(rename = "Providing information")]
    ProvidingInformation,
}

impl Intent {
    /// Tie-break order, highest priority first.
    pub const PRIORITY: [Intent; 5] = [
        Intent::SeekingReassurance,
        Intent::ReportingSymptoms,
        Intent::ExpressingConcern,
        Intent::AskingQuestions,
        Intent::ProvidingInformation,
    ];

    pub fn rank(self) -> usize {
        match self {
            Intent::SeekingReassurance => 0,
            Intent::ReportingSymptoms => 1,
            Intent::ExpressingConcern => 2,
            Intent::AskingQuestions => 3,
            Intent::ProvidingInformation => 4,
        }
    }
}

/// Sentiment and intent label for one patient turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub turn: usize,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
    #[serde(rename = "Intent")]
    pub intent: Intent,
    /// Sentiment confidence when a sentiment cue fired, else the intent
    /// confidence.
    #[serde(rename = "Confidence")]
    pub confidence: f64,
    #[serde(rename = "Sentiment_Confidence")]
    pub sentiment_confidence: f64,
    #[serde(rename = "Intent_Confidence")]
    pub intent_confidence: f64,
    #[serde(rename = "Secondary_Intents", default)]
    pub secondary_intents: Vec<Intent>,
    /// Matched cues behind the sentiment label.
    #[serde(rename = "Indicators", default)]
    pub indicators: Vec<String>,
    /// Matched cues behind the intent label.
    #[serde(rename = "Evidence", default)]
    pub evidence: Vec<String>,
}

/// Majority sentiment across patient turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSentiment {
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
    /// Mean per-turn sentiment confidence.
    #[serde(rename = "Confidence")]
    pub confidence: f64,
    #[serde(rename = "Indicators")]
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentCount {
    #[serde(rename = "Intent")]
    pub intent: Intent,
    #[serde(rename = "Count")]
    pub count: usize,
}

/// How often each intent led a patient turn, most frequent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentSummary {
    #[serde(rename = "Intent_Distribution")]
    pub distribution: Vec<IntentCount>,
    #[serde(rename = "Total_Statements")]
    pub total_statements: usize,
}

/// Ranked keyword phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub phrase: String,
    pub score: f64,
}

/// Structured report aggregated from extracted entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredSummary {
    #[serde(rename = "Patient_Name")]
    pub patient_name: String,
    #[serde(rename = "Symptoms")]
    pub symptoms: Vec<String>,
    #[serde(rename = "Diagnosis")]
    pub diagnosis: String,
    #[serde(rename = "Treatment")]
    pub treatment: Vec<String>,
    #[serde(rename = "Current_Status")]
    pub current_status: String,
    #[serde(rename = "Prognosis")]
    pub prognosis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subjective {
    #[serde(rename = "Chief_Complaint")]
    pub chief_complaint: String,
    #[serde(rename = "History_of_Present_Illness")]
    pub history_of_present_illness: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    #[serde(rename = "Physical_Exam")]
    pub physical_exam: String,
    #[serde(rename = "Observations")]
    pub observations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(rename = "Diagnosis")]
    pub diagnosis: String,
    #[serde(rename = "Severity")]
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(rename = "Treatment")]
    pub treatment: String,
    #[serde(rename = "Follow_Up")]
    pub follow_up: String,
}

/// Clinical note in SOAP layout. Every section and sub-key is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoapNote {
    #[serde(rename = "Subjective")]
    pub subjective: Subjective,
    #[serde(rename = "Objective")]
    pub objective: Objective,
    #[serde(rename = "Assessment")]
    pub assessment: Assessment,
    #[serde(rename = "Plan")]
    pub plan: Plan,
}

/// Complete output of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub entities: Vec<Entity>,
    pub structured_summary: StructuredSummary,
    pub keywords: Vec<Keyword>,
    pub sentiment_intent: Vec<ClassificationResult>,
    pub overall_sentiment: OverallSentiment,
    pub intent_summary: IntentSummary,
    pub soap_note: SoapNote,
    /// Leading patient sentences, verbatim.
    pub narrative: String,
}

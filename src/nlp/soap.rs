//! SOAP note assembly from turns, entities, and classifications.

use std::collections::BTreeSet;

use tracing::instrument;

use crate::nlp::{
    features,
    lexicon::{ExamField, Lexicon},
    summarize::top_entity,
    types::{
        Assessment, Category, ClassificationResult, Entity, Objective, Plan, Sentiment, SoapNote,
        StructuredSummary, Subjective, Turn, NOT_MENTIONED,
    },
};

pub const NO_EXAM_FINDINGS: &str = "No examination findings documented.";
pub const NO_OBSERVATIONS: &str = "No clinician observations documented.";
pub const SEVERITY_MODERATE: &str = "Moderate, monitor";
pub const SEVERITY_MILD: &str = "Mild, improving";
pub const FOLLOW_UP: &str = "Follow up as needed; return if symptoms worsen or persist.";
/// Weight a cue needs to count as a finding rather than an announcement.
pub const FINDING_WEIGHT: f64 = 1.0;

fn history(turns: &[Turn], entities: &[Entity]) -> String {
    let indices: BTreeSet<usize> = entities
        .iter()
        .filter(|e| matches!(e.category, Category::Symptom | Category::Diagnosis))
        .flat_map(|e| e.mentions.iter().map(|m| m.turn))
        .collect();
    let text: Vec<&str> = indices
        .into_iter()
        .filter_map(|i| turns.get(i))
        .filter(|t| t.is_patient())
        .map(|t| t.text.as_str())
        .collect();
    if text.is_empty() {
        NOT_MENTIONED.to_string()
    } else {
        text.join(" ")
    }
}

/// Doctor-turn sentences routed to the Objective field their cues favour.
/// A sentence needs at least one finding cue to be recorded.
fn objective(turns: &[Turn], lexicon: &Lexicon) -> Objective {
    let mut exam = Vec::new();
    let mut observations = Vec::new();
    for turn in turns.iter().filter(|t| t.is_doctor()) {
        for sentence in features::split_sentences(&turn.text) {
            let folded = features::fold(sentence);
            let (mut exam_score, mut obs_score) = (0.0, 0.0);
            let mut finding = false;
            for cue in lexicon.examination_cues() {
                if cue.is_match(&folded) {
                    finding |= cue.weight >= FINDING_WEIGHT;
                    match cue.target {
                        ExamField::PhysicalExam => exam_score += cue.weight,
                        ExamField::Observation => obs_score += cue.weight,
                    }
                }
            }
            if !finding {
                continue;
            }
            if exam_score >= obs_score {
                exam.push(sentence);
            } else {
                observations.push(sentence);
            }
        }
    }
    let or_default = |parts: Vec<&str>, default: &str| {
        if parts.is_empty() {
            default.to_string()
        } else {
            parts.join(" ")
        }
    };
    Objective {
        physical_exam: or_default(exam, NO_EXAM_FINDINGS),
        observations: or_default(observations, NO_OBSERVATIONS),
    }
}

/// A strict majority of Anxious patient turns reads as moderate.
pub fn severity(classifications: &[ClassificationResult]) -> String {
    if classifications.is_empty() {
        return NOT_MENTIONED.to_string();
    }
    let anxious = classifications
        .iter()
        .filter(|c| c.sentiment == Sentiment::Anxious)
        .count();
    if anxious * 2 > classifications.len() {
        SEVERITY_MODERATE.to_string()
    } else {
        SEVERITY_MILD.to_string()
    }
}

fn plan(entities: &[Entity], summary: &StructuredSummary) -> Plan {
    let treatments: Vec<&str> = entities
        .iter()
        .filter(|e| e.category == Category::Treatment)
        .map(|e| e.text.as_str())
        .collect();
    let treatment = if treatments.is_empty() {
        NOT_MENTIONED.to_string()
    } else {
        treatments.join(", ")
    };
    let follow_up = if summary.prognosis == NOT_MENTIONED {
        FOLLOW_UP.to_string()
    } else {
        format!("{FOLLOW_UP} Expected course: {}.", summary.prognosis)
    };
    Plan {
        treatment,
        follow_up,
    }
}

/// Build the four-section note. Missing evidence becomes sentinel text.
#[instrument(skip_all, fields(turns = turns.len(), entities = entities.len()))]
pub fn assemble(
    turns: &[Turn],
    entities: &[Entity],
    classifications: &[ClassificationResult],
    summary: &StructuredSummary,
    lexicon: &Lexicon,
) -> SoapNote {
    let chief_complaint = top_entity(entities, Category::Symptom)
        .map(|e| e.text.clone())
        .unwrap_or_else(|| NOT_MENTIONED.to_string());
    SoapNote {
        subjective: Subjective {
            chief_complaint,
            history_of_present_illness: history(turns, entities),
        },
        objective: objective(turns, lexicon),
        assessment: Assessment {
            diagnosis: summary.diagnosis.clone(),
            severity: severity(classifications),
        },
        plan: plan(entities, summary),
    }
}

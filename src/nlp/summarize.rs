//! Structured summary built from extracted entities.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::instrument;

use crate::nlp::{
    features,
    lexicon::Lexicon,
    types::{Category, Entity, StructuredSummary, Turn, NOT_MENTIONED},
};

static TITLED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(Mr|Mrs|Ms|Miss|Mx)\.?\s+([A-Z][a-zA-Z'\-]+)").expect("valid regex")
});

/// A greeting addressed to a single bare name that closes the clause:
/// "Hello Janet," or "Good morning, Sam." but not "Hi, My neck hurts".
static GREETED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Good (?:morning|afternoon|evening)|Hello|Hi),?\s+([A-Z][a-z]+)\s*(?:[,.!?]|$)")
        .expect("valid regex")
});

static SELF_INTRODUCED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[Mm]y name is\s+([A-Z][a-zA-Z'\-]+(?:\s+[A-Z][a-zA-Z'\-]+)?)")
        .expect("valid regex")
});

/// Greeting targets that are not patient names.
const NOT_NAMES: &[&str] = &[
    "Doctor", "Doc", "Dr", "Sir", "Madam", "Everyone", "There", "Nurse", "All", "Again",
    "My", "Our", "Your", "His", "Her", "Their", "It", "I", "We", "You", "They", "He", "She",
    "The", "This", "That", "These", "Those", "Yes", "No", "Thanks", "Well", "Okay", "So",
];

fn name_in(text: &str) -> Option<String> {
    if let Some(caps) = TITLED_NAME.captures(text) {
        let title = &caps[1];
        let dot = if title == "Miss" { "" } else { "." };
        return Some(format!("{title}{dot} {}", &caps[2]));
    }
    if let Some(caps) = GREETED_NAME.captures(text) {
        let name = &caps[1];
        if !NOT_NAMES.contains(&name) {
            return Some(name.to_string());
        }
    }
    SELF_INTRODUCED.captures(text).map(|caps| caps[1].to_string())
}

/// First patient name found scanning turns in dialogue order.
pub fn patient_name(turns: &[Turn]) -> Option<String> {
    turns.iter().find_map(|turn| name_in(&turn.text))
}

fn labels(entities: &[Entity], category: Category) -> Vec<String> {
    entities
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.text.clone())
        .collect()
}

/// Highest-confidence entity of a category, earliest on ties.
pub fn top_entity(entities: &[Entity], category: Category) -> Option<&Entity> {
    entities
        .iter()
        .filter(|e| e.category == category)
        .fold(None, |best: Option<&Entity>, e| match best {
            Some(b) if b.confidence >= e.confidence => Some(b),
            _ => Some(e),
        })
}

fn or_sentinel(values: Vec<String>) -> Vec<String> {
    if values.is_empty() {
        vec![NOT_MENTIONED.to_string()]
    } else {
        values
    }
}

/// Sentence of the latest patient turn that mentions a symptom alongside an
/// ongoing cue.
pub fn current_status(turns: &[Turn], entities: &[Entity], lexicon: &Lexicon) -> Option<String> {
    let mut best: Option<(usize, &str)> = None;
    for entity in entities.iter().filter(|e| e.category == Category::Symptom) {
        for mention in &entity.mentions {
            let Some(turn) = turns.get(mention.turn) else {
                continue;
            };
            if !turn.is_patient() || best.map_or(false, |(idx, _)| idx >= mention.turn) {
                continue;
            }
            let folded = features::fold(&turn.text);
            let ongoing = lexicon
                .ongoing_cues()
                .iter()
                .any(|cue| features::contains_phrase(&folded, cue));
            if ongoing {
                best = Some((mention.turn, mention.surface.as_str()));
            }
        }
    }

    let (index, surface) = best?;
    let text = &turns[index].text;
    let surface = features::fold(surface);
    let sentence = features::split_sentences(text)
        .into_iter()
        .find(|s| features::fold(s).contains(&surface))
        .unwrap_or(text.as_str());
    let trimmed = sentence.trim().trim_end_matches(['.', '!', '?']).trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(features::capitalize(trimmed))
    }
}

/// Placeholder narrative when no patient sentence exists.
pub const NO_NARRATIVE: &str = "No summary available.";
const NARRATIVE_SENTENCES: usize = 5;

/// Extractive narrative: the leading patient sentences in dialogue order.
pub fn narrative(turns: &[Turn]) -> String {
    let sentences: Vec<String> = turns
        .iter()
        .filter(|t| t.is_patient())
        .flat_map(|t| features::split_sentences(&t.text))
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .take(NARRATIVE_SENTENCES)
        .map(|s| {
            if s.ends_with(['.', '!', '?']) {
                s.to_string()
            } else {
                format!("{s}.")
            }
        })
        .collect();
    if sentences.is_empty() {
        NO_NARRATIVE.to_string()
    } else {
        sentences.join(" ")
    }
}

/// Aggregate turns and entities into the six-field summary.
#[instrument(skip_all, fields(entities = entities.len()))]
pub fn summarize(turns: &[Turn], entities: &[Entity], lexicon: &Lexicon) -> StructuredSummary {
    let single = |category| {
        top_entity(entities, category)
            .map(|e| e.text.clone())
            .unwrap_or_else(|| NOT_MENTIONED.to_string())
    };
    StructuredSummary {
        patient_name: patient_name(turns).unwrap_or_else(|| NOT_MENTIONED.to_string()),
        symptoms: or_sentinel(labels(entities, Category::Symptom)),
        diagnosis: single(Category::Diagnosis),
        treatment: or_sentinel(labels(entities, Category::Treatment)),
        current_status: current_status(turns, entities, lexicon)
            .unwrap_or_else(|| NOT_MENTIONED.to_string()),
        prognosis: single(Category::Prognosis),
    }
}

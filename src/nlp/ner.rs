//! Dictionary-based clinical entity extraction over patient turns.

use indexmap::IndexMap;
use tracing::{debug, instrument, warn};

use crate::nlp::{
    features,
    lexicon::Lexicon,
    scorer::Scorer,
    types::{Category, Entity, Mention, Turn},
};

/// Multiplier for a match with a negation cue shortly before it.
pub const NEGATION_FACTOR: f64 = 0.35;
/// Multiplier for a match near an intensity cue. Result is clamped to 1.0.
pub const INTENSITY_FACTOR: f64 = 1.25;
/// Words inspected either side of a match for context cues.
pub const CONTEXT_WINDOW: usize = 3;

/// Extracted entity span with offsets relative to the turn text.
#[derive(Debug, Clone)]
pub struct Span {
    pub category: Category,
    pub label: String,
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub score: f64,
}

/// Candidate spans for one turn, before merging.
pub fn find_spans(text: &str, lexicon: &Lexicon) -> Vec<Span> {
    let folded = features::fold(text);
    let mut spans = Vec::new();
    for entry in lexicon.entries() {
        for form in &entry.surface_forms {
            for (start, end) in features::find_phrase(&folded, form) {
                let score = if features::is_negated(&folded, start, lexicon.negations(), CONTEXT_WINDOW) {
                    entry.weight * NEGATION_FACTOR
                } else if features::is_intensified(
                    &folded,
                    start,
                    end,
                    lexicon.intensifiers(),
                    CONTEXT_WINDOW,
                ) {
                    entry.weight * INTENSITY_FACTOR
                } else {
                    entry.weight
                };
                spans.push(Span {
                    category: entry.category,
                    label: entry.label.clone(),
                    start,
                    end,
                    text: text[start..end].to_string(),
                    score: score.clamp(0.0, 1.0),
                });
            }
        }
    }
    spans
}

fn scorer_spans(text: &str, scorer: &dyn Scorer) -> Vec<Span> {
    scorer
        .entities(text)
        .into_iter()
        .filter_map(|candidate| {
            let valid = candidate.start < candidate.end
                && candidate.end <= text.len()
                && text.is_char_boundary(candidate.start)
                && text.is_char_boundary(candidate.end)
                && candidate.confidence.is_finite()
                && !candidate.text.trim().is_empty();
            if !valid {
                warn!(scorer = scorer.name(), text = %candidate.text, "discarding out-of-range scorer entity");
                return None;
            }
            Some(Span {
                category: candidate.category,
                label: candidate.text.trim().to_string(),
                start: candidate.start,
                end: candidate.end,
                text: text[candidate.start..candidate.end].to_string(),
                score: candidate.confidence.clamp(0.0, 1.0),
            })
        })
        .collect()
}

/// Merge overlapping spans of one category. The group keeps the highest score
/// and the longest span's label, the earliest winning ties.
fn merge_overlaps(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by_key(|s| (s.start, std::cmp::Reverse(s.end)));
    let mut groups: Vec<(usize, Span)> = Vec::new();
    for span in spans {
        match groups.last_mut() {
            Some((group_end, best)) if span.start < *group_end => {
                *group_end = (*group_end).max(span.end);
                let score = best.score.max(span.score);
                if span.end - span.start > best.end - best.start {
                    *best = span;
                }
                best.score = score;
            }
            _ => groups.push((span.end, span)),
        }
    }
    groups.into_iter().map(|(_, span)| span).collect()
}

/// Extract entities from patient turns, deduplicated by category and
/// lower-cased text, in order of first appearance.
#[instrument(skip_all, fields(turns = turns.len()))]
pub fn extract_entities(
    turns: &[Turn],
    lexicon: &Lexicon,
    floor: f64,
    scorer: Option<&dyn Scorer>,
) -> Vec<Entity> {
    let mut found: IndexMap<(Category, String), Entity> = IndexMap::new();

    for turn in turns.iter().filter(|t| t.is_patient()) {
        let mut spans = find_spans(&turn.text, lexicon);
        if let Some(scorer) = scorer {
            spans.extend(scorer_spans(&turn.text, scorer));
        }

        let mut merged = Vec::new();
        for category in Category::ALL {
            let in_category: Vec<Span> = spans.iter().filter(|s| s.category == category).cloned().collect();
            merged.extend(merge_overlaps(in_category));
        }
        merged.sort_by_key(|s| s.start);

        for span in merged {
            if span.score < floor {
                debug!(label = %span.label, score = span.score, "below confidence floor");
                continue;
            }
            let mention = Mention {
                turn: turn.index,
                surface: span.text.clone(),
            };
            let key = (span.category, span.label.to_lowercase());
            match found.get_mut(&key) {
                Some(entity) => {
                    if span.score > entity.confidence {
                        entity.text = span.label;
                        entity.surface = span.text;
                        entity.source_turn = turn.index;
                        entity.confidence = span.score;
                    }
                    entity.mentions.push(mention);
                }
                None => {
                    found.insert(
                        key,
                        Entity {
                            category: span.category,
                            text: span.label,
                            surface: span.text,
                            source_turn: turn.index,
                            confidence: span.score,
                            mentions: vec![mention],
                        },
                    );
                }
            }
        }
    }

    debug!(entities = found.len(), "extracted entities");
    found.into_values().collect()
}

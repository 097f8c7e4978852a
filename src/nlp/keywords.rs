//! Keyword ranking over stopword-bounded candidate phrases.

use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::nlp::{
    features,
    lexicon::Lexicon,
    types::{Keyword, Turn},
};

/// Occurrence weight for a phrase spoken by the patient.
pub const PATIENT_WEIGHT: f64 = 1.5;
/// Occurrence weight for any other speaker.
pub const OTHER_WEIGHT: f64 = 1.0;

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Break,
}

fn is_joiner(c: char) -> bool {
    c == '\'' || c == '-'
}

/// Words are alphanumeric runs with internal apostrophes or hyphens.
/// Punctuation other than whitespace ends a phrase.
fn tokenize(folded: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let chars: Vec<(usize, char)> = folded.char_indices().collect();
    let mut i = 0;
    while i < chars.len() {
        let (start, c) = chars[i];
        if c.is_alphanumeric() {
            let mut j = i + 1;
            while j < chars.len() {
                let next = chars[j].1;
                let joined = is_joiner(next)
                    && chars.get(j + 1).map_or(false, |(_, after)| after.is_alphanumeric());
                if next.is_alphanumeric() || joined {
                    j += 1;
                } else {
                    break;
                }
            }
            let end = chars.get(j).map_or(folded.len(), |(pos, _)| *pos);
            tokens.push(Token::Word(&folded[start..end]));
            i = j;
        } else {
            if !c.is_whitespace() && tokens.last() != Some(&Token::Break) {
                tokens.push(Token::Break);
            }
            i += 1;
        }
    }
    tokens
}

fn flush(run: &mut Vec<&str>, lexicon: &Lexicon, out: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    let phrase = run.join(" ");
    if run.len() >= 2 || lexicon.is_vocabulary(&phrase) {
        out.push(phrase);
    }
    run.clear();
}

/// Candidate phrases of one text: maximal runs of non-stopwords, kept when
/// they span two or more words or are a lexicon term.
fn candidates(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let folded = features::fold(text);
    let mut out = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    for token in tokenize(&folded) {
        match token {
            Token::Word(word) if !lexicon.is_stopword(word) => run.push(word),
            _ => flush(&mut run, lexicon, &mut out),
        }
    }
    flush(&mut run, lexicon, &mut out);
    out
}

/// Rank candidate phrases across the transcript, highest score first.
#[instrument(skip_all, fields(turns = turns.len(), top_k = top_k))]
pub fn extract_keywords(turns: &[Turn], lexicon: &Lexicon, top_k: usize) -> Vec<Keyword> {
    if top_k == 0 {
        return Vec::new();
    }
    let mut scores: IndexMap<String, f64> = IndexMap::new();
    for turn in turns {
        let weight = if turn.is_patient() { PATIENT_WEIGHT } else { OTHER_WEIGHT };
        for phrase in candidates(&turn.text, lexicon) {
            *scores.entry(phrase).or_insert(0.0) += weight;
        }
    }
    debug!(candidates = scores.len(), "scored keyword candidates");

    let mut ranked: Vec<Keyword> = scores
        .into_iter()
        .map(|(phrase, score)| Keyword { phrase, score })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(top_k);
    ranked
}

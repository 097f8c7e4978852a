//! Lexicon store: categorized vocabulary and cue tables.
//!
//! A [`LexiconBundle`] is the serializable source (built-in tables or a JSON
//! file). Compiling it into a [`Lexicon`] validates every entry, lower-cases
//! surface forms, and builds the cue matchers. The compiled lexicon is
//! immutable and shared behind an `Arc`.

use std::{
    collections::HashSet,
    fs,
    path::Path,
    sync::Arc,
};

use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    data::vocabulary,
    error::{AnalysisError, Result},
    nlp::{
        features,
        types::{Category, Intent, Sentiment},
    },
};

/// Categorized vocabulary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub category: Category,
    /// Canonical display text reported for every surface form.
    pub label: String,
    pub surface_forms: Vec<String>,
    pub weight: f64,
}

/// SOAP Objective field an examination cue feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamField {
    PhysicalExam,
    Observation,
}

/// Serializable cue rule: pattern → target category, weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CueSpec<T> {
    pub pattern: String,
    pub target: T,
    pub weight: f64,
    /// Treat `pattern` as a regular expression instead of a literal phrase.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub regex: bool,
}

/// Source form of a lexicon, as shipped or loaded from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconBundle {
    pub entries: Vec<LexiconEntry>,
    pub sentiment_cues: Vec<CueSpec<Sentiment>>,
    pub intent_cues: Vec<CueSpec<Intent>>,
    pub examination_cues: Vec<CueSpec<ExamField>>,
    pub negations: Vec<String>,
    pub intensifiers: Vec<String>,
    pub ongoing_cues: Vec<String>,
    /// Single terms that qualify as keywords on their own.
    pub vocabulary: Vec<String>,
    pub stopwords: Vec<String>,
}

/// Compiled cue rule.
#[derive(Debug, Clone)]
pub struct Cue<T> {
    pub pattern: String,
    pub target: T,
    pub weight: f64,
    matcher: Regex,
}

impl<T> Cue<T> {
    /// First match in folded text as a byte range.
    pub fn find(&self, folded: &str) -> Option<(usize, usize)> {
        self.matcher.find(folded).map(|m| (m.start(), m.end()))
    }

    pub fn is_match(&self, folded: &str) -> bool {
        self.matcher.is_match(folded)
    }
}

/// Immutable, validated lexicon.
#[derive(Debug)]
pub struct Lexicon {
    bundle: LexiconBundle,
    entries: Vec<LexiconEntry>,
    sentiment_cues: Vec<Cue<Sentiment>>,
    intent_cues: Vec<Cue<Intent>>,
    examination_cues: Vec<Cue<ExamField>>,
    negations: Vec<String>,
    intensifiers: Vec<String>,
    ongoing_cues: Vec<String>,
    vocabulary: HashSet<String>,
    stopwords: HashSet<String>,
}

static BUILTIN: OnceCell<Arc<Lexicon>> = OnceCell::new();

impl Lexicon {
    /// Process-wide built-in lexicon, compiled on first use.
    pub fn builtin() -> Result<Arc<Lexicon>> {
        BUILTIN
            .get_or_try_init(|| Lexicon::compile(vocabulary::builtin_bundle()).map(Arc::new))
            .cloned()
    }

    /// Load a JSON bundle from disk.
    pub fn from_path(path: &Path) -> Result<Lexicon> {
        let raw = fs::read_to_string(path).map_err(|err| {
            AnalysisError::LexiconLoad(format!("reading {}: {err}", path.display()))
        })?;
        let bundle: LexiconBundle = serde_json::from_str(&raw).map_err(|err| {
            AnalysisError::LexiconLoad(format!("parsing {}: {err}", path.display()))
        })?;
        let lexicon = Lexicon::compile(bundle)?;
        info!(path = %path.display(), entries = lexicon.entries.len(), "loaded lexicon bundle");
        Ok(lexicon)
    }

    /// The bundle at `path` if given, otherwise the built-in one.
    pub fn load(path: Option<&Path>) -> Result<Arc<Lexicon>> {
        match path {
            Some(path) => Lexicon::from_path(path).map(Arc::new),
            None => Lexicon::builtin(),
        }
    }

    /// Validate a bundle and build its matchers.
    pub fn compile(bundle: LexiconBundle) -> Result<Lexicon> {
        if bundle.entries.is_empty() {
            return Err(AnalysisError::LexiconLoad("lexicon has no entries".into()));
        }
        let mut entries = Vec::with_capacity(bundle.entries.len());
        for entry in &bundle.entries {
            entries.push(normalize_entry(entry)?);
        }

        let sentiment_cues = compile_cues(&bundle.sentiment_cues)?;
        let intent_cues = compile_cues(&bundle.intent_cues)?;
        let examination_cues = compile_cues(&bundle.examination_cues)?;

        let mut vocabulary: HashSet<String> = normalize_terms(&bundle.vocabulary).into_iter().collect();
        for entry in &entries {
            vocabulary.extend(entry.surface_forms.iter().cloned());
        }

        let lexicon = Lexicon {
            entries,
            sentiment_cues,
            intent_cues,
            examination_cues,
            negations: normalize_terms(&bundle.negations),
            intensifiers: normalize_terms(&bundle.intensifiers),
            ongoing_cues: normalize_terms(&bundle.ongoing_cues),
            vocabulary,
            stopwords: normalize_terms(&bundle.stopwords).into_iter().collect(),
            bundle,
        };
        debug!(
            entries = lexicon.entries.len(),
            sentiment_cues = lexicon.sentiment_cues.len(),
            intent_cues = lexicon.intent_cues.len(),
            "compiled lexicon"
        );
        Ok(lexicon)
    }

    /// Source bundle, for export.
    pub fn bundle(&self) -> &LexiconBundle {
        &self.bundle
    }

    /// Entries with lower-cased, trimmed surface forms.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn entries_in(&self, category: Category) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn sentiment_cues(&self) -> &[Cue<Sentiment>] {
        &self.sentiment_cues
    }

    pub fn intent_cues(&self) -> &[Cue<Intent>] {
        &self.intent_cues
    }

    pub fn examination_cues(&self) -> &[Cue<ExamField>] {
        &self.examination_cues
    }

    pub fn negations(&self) -> &[String] {
        &self.negations
    }

    pub fn intensifiers(&self) -> &[String] {
        &self.intensifiers
    }

    pub fn ongoing_cues(&self) -> &[String] {
        &self.ongoing_cues
    }

    /// Whether a folded term is vocabulary or a surface form.
    pub fn is_vocabulary(&self, term: &str) -> bool {
        self.vocabulary.contains(term)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

fn normalize_term(term: &str) -> String {
    features::fold(&features::normalize_text(term))
}

fn normalize_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .map(|t| normalize_term(t))
        .filter(|t| !t.is_empty())
        .collect()
}

fn normalize_entry(entry: &LexiconEntry) -> Result<LexiconEntry> {
    let label = entry.label.trim();
    if label.is_empty() {
        return Err(AnalysisError::LexiconLoad(format!(
            "{:?} entry has an empty label",
            entry.category
        )));
    }
    if !entry.weight.is_finite() || entry.weight <= 0.0 || entry.weight > 1.0 {
        return Err(AnalysisError::LexiconLoad(format!(
            "entry {label:?} has weight {} outside (0, 1]",
            entry.weight
        )));
    }
    if entry.surface_forms.is_empty() {
        return Err(AnalysisError::LexiconLoad(format!(
            "entry {label:?} has no surface forms"
        )));
    }
    let mut surface_forms = Vec::with_capacity(entry.surface_forms.len());
    for form in &entry.surface_forms {
        let form = normalize_term(form);
        if form.is_empty() {
            return Err(AnalysisError::LexiconLoad(format!(
                "entry {label:?} has an empty surface form"
            )));
        }
        surface_forms.push(form);
    }
    Ok(LexiconEntry {
        category: entry.category,
        label: label.to_string(),
        surface_forms,
        weight: entry.weight,
    })
}

fn compile_cues<T: Copy>(rules: &[CueSpec<T>]) -> Result<Vec<Cue<T>>> {
    rules
        .iter()
        .map(|rule| {
            if rule.pattern.trim().is_empty() {
                return Err(AnalysisError::LexiconLoad("cue with empty pattern".into()));
            }
            if !rule.weight.is_finite() || rule.weight <= 0.0 {
                return Err(AnalysisError::LexiconLoad(format!(
                    "cue {:?} has non-positive weight {}",
                    rule.pattern, rule.weight
                )));
            }
            let source = if rule.regex {
                rule.pattern.clone()
            } else {
                phrase_pattern(&normalize_term(&rule.pattern))
            };
            let matcher = RegexBuilder::new(&source)
                .case_insensitive(true)
                .build()
                .map_err(|err| {
                    AnalysisError::LexiconLoad(format!("cue {:?}: {err}", rule.pattern))
                })?;
            Ok(Cue {
                pattern: rule.pattern.clone(),
                target: rule.target,
                weight: rule.weight,
                matcher,
            })
        })
        .collect()
}

/// Literal phrase as a regex, word-bounded where the phrase edge is a word char.
fn phrase_pattern(phrase: &str) -> String {
    let lead = if phrase.starts_with(char::is_alphanumeric) { r"\b" } else { "" };
    let trail = if phrase.ends_with(char::is_alphanumeric) { r"\b" } else { "" };
    format!("{lead}{}{trail}", regex::escape(phrase))
}

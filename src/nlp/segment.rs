//! Speaker-turn segmentation for raw transcripts.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::nlp::{
    features,
    types::{Speaker, Turn},
};

/// `Label: text`, where the label is up to three name-like words.
static LABEL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z.'\-]*(?:\s+[A-Za-z][A-Za-z.'\-]*){0,2})\s*:\s*(.*)$")
        .expect("valid regex")
});

/// Speaker label sets, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerLabels {
    doctor: Vec<String>,
    patient: Vec<String>,
}

impl SpeakerLabels {
    pub fn new(doctor: &[String], patient: &[String]) -> Self {
        let norm = |labels: &[String]| {
            labels
                .iter()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .collect()
        };
        Self {
            doctor: norm(doctor),
            patient: norm(patient),
        }
    }

    /// Role for a label as written in the transcript.
    pub fn resolve(&self, label: &str) -> Speaker {
        let label = label.trim().to_lowercase();
        if self.doctor.contains(&label) {
            Speaker::Doctor
        } else if self.patient.contains(&label) {
            Speaker::Patient
        } else {
            Speaker::Unknown
        }
    }
}

impl Default for SpeakerLabels {
    fn default() -> Self {
        Self::new(
            &["Doctor".to_string(), "Physician".to_string()],
            &["Patient".to_string()],
        )
    }
}

/// Split a transcript into speaker turns.
///
/// A line opening with a recognised `Label:` starts a new turn. Any other
/// non-blank line, including one with an unrecognised label such as
/// `First week:`, continues the previous turn. An unrecognised label before
/// any turn opens an `Unknown` turn; unlabelled text there is dropped.
pub fn segment(transcript: &str, labels: &SpeakerLabels) -> Vec<Turn> {
    let mut turns: Vec<Turn> = Vec::new();
    let mut dropped = 0usize;
    let mut folded = 0usize;

    for line in transcript.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(caps) = LABEL_LINE.captures(line) {
            let speaker = labels.resolve(&caps[1]);
            if speaker != Speaker::Unknown || turns.is_empty() {
                let text = features::normalize_text(&caps[2]);
                let index = turns.len();
                turns.push(Turn::new(speaker, text, index));
                continue;
            }
            folded += 1;
        }
        match turns.last_mut() {
            Some(turn) => {
                let continuation = features::normalize_text(line);
                if turn.text.is_empty() {
                    turn.text = continuation;
                } else {
                    turn.text.push(' ');
                    turn.text.push_str(&continuation);
                }
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, "skipped unlabeled lines before the first speaker");
    }
    if folded > 0 {
        debug!(folded, "kept unrecognised labels as continuation text");
    }
    debug!(turns = turns.len(), "segmented transcript");
    turns
}

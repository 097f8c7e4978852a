//! Rule-based sentiment and intent classification of patient turns.

use tracing::{instrument, trace};

use crate::nlp::{
    features,
    lexicon::Lexicon,
    scorer::Scorer,
    types::{
        ClassificationResult, Intent, IntentCount, IntentSummary, OverallSentiment, Sentiment, Turn,
    },
};

/// Multiplier applied to Anxious and Reassured scores when the turn carries an
/// intensity cue.
pub const INTENSIFIER_BOOST: f64 = 1.5;
/// Share of a negated Anxious cue credited to Reassured ("not worried").
pub const NEGATED_ANXIETY_CREDIT: f64 = 0.5;

const NEGATION_WINDOW: usize = 3;

/// Winner of a score vector indexed by priority rank, with its confidence.
///
/// Ties go to the lower rank. Returns `None` when nothing scored.
fn resolve(scores: &[f64]) -> Option<(usize, f64)> {
    let total: f64 = scores.iter().sum();
    if total <= 0.0 {
        return None;
    }
    let mut best = 0;
    for (rank, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = rank;
        }
    }
    Some((best, (scores[best] / total).clamp(0.0, 1.0)))
}

/// Intents whose cues are void when negated ("I don't feel nervous").
const NEGATABLE_INTENTS: [Intent; 1] = [Intent::ExpressingConcern];
/// A secondary intent scores at least this share of the primary.
const SECONDARY_SHARE: f64 = 0.5;
const MAX_SECONDARY: usize = 2;
const MAX_INDICATORS: usize = 5;
const MAX_EVIDENCE: usize = 3;

/// Cue scores per label rank, with the matched text behind each label.
struct Tally<const N: usize> {
    scores: [f64; N],
    matched: [Vec<String>; N],
}

impl<const N: usize> Tally<N> {
    fn new() -> Self {
        Self {
            scores: [0.0; N],
            matched: std::array::from_fn(|_| Vec::new()),
        }
    }

    fn add(&mut self, rank: usize, weight: f64, text: &str) {
        self.scores[rank] += weight;
        if !self.matched[rank].iter().any(|m| m == text) {
            self.matched[rank].push(text.to_string());
        }
    }

    fn matched_for(&self, rank: Option<usize>, limit: usize) -> Vec<String> {
        rank.map(|r| self.matched[r].iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }
}

fn sentiment_scores(folded: &str, lexicon: &Lexicon) -> Tally<3> {
    let mut tally = Tally::new();
    for cue in lexicon.sentiment_cues() {
        let Some((start, end)) = cue.find(folded) else {
            continue;
        };
        if features::is_negated(folded, start, lexicon.negations(), NEGATION_WINDOW) {
            if cue.target == Sentiment::Anxious {
                tally.scores[Sentiment::Reassured.rank()] += cue.weight * NEGATED_ANXIETY_CREDIT;
            }
            continue;
        }
        tally.add(cue.target.rank(), cue.weight, &folded[start..end]);
    }
    let intensified = lexicon
        .intensifiers()
        .iter()
        .any(|cue| features::contains_phrase(folded, cue));
    if intensified {
        tally.scores[Sentiment::Anxious.rank()] *= INTENSIFIER_BOOST;
        tally.scores[Sentiment::Reassured.rank()] *= INTENSIFIER_BOOST;
    }
    tally
}

fn intent_scores(folded: &str, lexicon: &Lexicon) -> Tally<5> {
    let mut tally = Tally::new();
    for cue in lexicon.intent_cues() {
        let Some((start, end)) = cue.find(folded) else {
            continue;
        };
        if NEGATABLE_INTENTS.contains(&cue.target)
            && features::is_negated(folded, start, lexicon.negations(), NEGATION_WINDOW)
        {
            continue;
        }
        let text = folded[start..end].trim();
        let text = if text.is_empty() { cue.pattern.as_str() } else { text };
        tally.add(cue.target.rank(), cue.weight, text);
    }
    tally
}

/// Nonzero intents other than the primary scoring at least half as much,
/// strongest first.
fn secondary_intents(scores: &[f64; 5], primary: Option<usize>) -> Vec<Intent> {
    let Some(primary) = primary else {
        return Vec::new();
    };
    let threshold = scores[primary] * SECONDARY_SHARE;
    let mut ranks: Vec<usize> = (0..scores.len())
        .filter(|&r| r != primary && scores[r] > 0.0 && scores[r] >= threshold)
        .collect();
    ranks.sort_by(|a, b| scores[*b].total_cmp(&scores[*a]).then(a.cmp(b)));
    ranks
        .into_iter()
        .take(MAX_SECONDARY)
        .map(|r| Intent::PRIORITY[r])
        .collect()
}

/// Classify a single turn. Each cue counts once per turn.
///
/// `Confidence` follows the sentiment axis when any sentiment cue fired and
/// the intent axis otherwise.
pub fn classify(turn: &Turn, lexicon: &Lexicon, scorer: Option<&dyn Scorer>) -> ClassificationResult {
    let folded = features::fold(&turn.text);
    let mut sentiment = sentiment_scores(&folded, lexicon);
    let mut intent = intent_scores(&folded, lexicon);

    if let Some(scorer) = scorer {
        let card = scorer.classify(&turn.text);
        for (label, score) in card.sentiment {
            if score.is_finite() && score > 0.0 {
                sentiment.scores[label.rank()] += score;
            }
        }
        for (label, score) in card.intent {
            if score.is_finite() && score > 0.0 {
                intent.scores[label.rank()] += score;
            }
        }
    }
    trace!(turn = turn.index, sentiment = ?sentiment.scores, intent = ?intent.scores, "cue scores");

    let sentiment_winner = resolve(&sentiment.scores);
    let intent_winner = resolve(&intent.scores);
    let (sentiment_label, sentiment_confidence) = match sentiment_winner {
        Some((rank, conf)) => (Sentiment::PRIORITY[rank], conf),
        None => (Sentiment::Neutral, 0.0),
    };
    let (intent_label, intent_confidence) = match intent_winner {
        Some((rank, conf)) => (Intent::PRIORITY[rank], conf),
        None => (Intent::ProvidingInformation, 0.0),
    };
    let confidence = if sentiment_winner.is_some() {
        sentiment_confidence
    } else {
        intent_confidence
    };

    let sentiment_rank = sentiment_winner.map(|(rank, _)| rank);
    let intent_rank = intent_winner.map(|(rank, _)| rank);
    ClassificationResult {
        turn: turn.index,
        sentiment: sentiment_label,
        intent: intent_label,
        confidence,
        sentiment_confidence,
        intent_confidence,
        secondary_intents: secondary_intents(&intent.scores, intent_rank),
        indicators: sentiment.matched_for(sentiment_rank, MAX_INDICATORS),
        evidence: intent.matched_for(intent_rank, MAX_EVIDENCE),
    }
}

/// Classify every patient turn, in dialogue order.
#[instrument(skip_all, fields(turns = turns.len()))]
pub fn classify_turns(
    turns: &[Turn],
    lexicon: &Lexicon,
    scorer: Option<&dyn Scorer>,
) -> Vec<ClassificationResult> {
    turns
        .iter()
        .filter(|t| t.is_patient())
        .map(|t| classify(t, lexicon, scorer))
        .collect()
}

/// Majority sentiment over classified turns, ties by priority, with the mean
/// confidence. Neutral at 0.0 when there is nothing to aggregate.
pub fn overall_sentiment(results: &[ClassificationResult]) -> OverallSentiment {
    if results.is_empty() {
        return OverallSentiment {
            sentiment: Sentiment::Neutral,
            confidence: 0.0,
            indicators: Vec::new(),
        };
    }
    let mut counts = [0usize; 3];
    for result in results {
        counts[result.sentiment.rank()] += 1;
    }
    let mut best = 0;
    for rank in 1..counts.len() {
        if counts[rank] > counts[best] {
            best = rank;
        }
    }
    let sentiment = Sentiment::PRIORITY[best];
    let confidence =
        results.iter().map(|r| r.sentiment_confidence).sum::<f64>() / results.len() as f64;

    let mut indicators: Vec<String> = Vec::new();
    for indicator in results
        .iter()
        .filter(|r| r.sentiment == sentiment)
        .flat_map(|r| r.indicators.iter())
    {
        if indicators.len() == MAX_INDICATORS {
            break;
        }
        if !indicators.contains(indicator) {
            indicators.push(indicator.clone());
        }
    }
    OverallSentiment {
        sentiment,
        confidence,
        indicators,
    }
}

/// Count of turns led by each intent, most frequent first, ties by priority.
pub fn intent_summary(results: &[ClassificationResult]) -> IntentSummary {
    let mut counts = [0usize; 5];
    for result in results {
        counts[result.intent.rank()] += 1;
    }
    let mut distribution: Vec<IntentCount> = Intent::PRIORITY
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(intent, count)| IntentCount {
            intent: *intent,
            count,
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    IntentSummary {
        distribution,
        total_statements: results.len(),
    }
}

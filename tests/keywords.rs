use physician_notetaker::nlp::{
    keywords::extract_keywords,
    lexicon::Lexicon,
    segment::{segment, SpeakerLabels},
};

const TRANSCRIPT: &str = "Doctor: How is the neck pain?\n\
Patient: The neck pain is better.\n\
Patient: Physiotherapy helped.";

#[test]
fn patient_phrases_outrank_and_ties_keep_first_appearance() {
    let lexicon = Lexicon::builtin().unwrap();
    let turns = segment(TRANSCRIPT, &SpeakerLabels::default());
    let keywords = extract_keywords(&turns, &lexicon, 10);
    let phrases: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();
    assert_eq!(phrases, vec!["neck pain", "physiotherapy helped"]);
    assert!((keywords[0].score - 2.5).abs() < 1e-9);
}

#[test]
fn top_k_bounds_the_result() {
    let lexicon = Lexicon::builtin().unwrap();
    let turns = segment(TRANSCRIPT, &SpeakerLabels::default());
    assert_eq!(extract_keywords(&turns, &lexicon, 1).len(), 1);
    assert!(extract_keywords(&turns, &lexicon, 0).is_empty());
}

#[test]
fn single_lexicon_terms_qualify() {
    let lexicon = Lexicon::builtin().unwrap();
    let turns = segment("Patient: Whiplash. Okay.", &SpeakerLabels::default());
    let keywords = extract_keywords(&turns, &lexicon, 5);
    assert_eq!(keywords.len(), 1);
    assert_eq!(keywords[0].phrase, "whiplash");
}

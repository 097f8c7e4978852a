use physician_notetaker::nlp::{
    lexicon::Lexicon,
    ner::extract_entities,
    segment::{segment, SpeakerLabels},
    summarize::{current_status, patient_name, summarize},
    types::NOT_MENTIONED,
};

const FOLLOW_UP: &str = include_str!("fixtures/whiplash_followup.txt");

fn name_of(transcript: &str) -> Option<String> {
    patient_name(&segment(transcript, &SpeakerLabels::default()))
}

#[test]
fn titles_are_normalised() {
    assert_eq!(name_of("Doctor: Good morning, Ms Jones.").as_deref(), Some("Ms. Jones"));
    assert_eq!(name_of("Doctor: Come in, Miss Smith.").as_deref(), Some("Miss Smith"));
}

#[test]
fn greetings_skip_non_names() {
    assert_eq!(name_of("Doctor: Hello Janet, come in.").as_deref(), Some("Janet"));
    assert_eq!(
        name_of("Patient: Hi Doctor, my name is Sam Lee.").as_deref(),
        Some("Sam Lee")
    );
    assert_eq!(name_of("Patient: Hello there."), None);
}

#[test]
fn greetings_followed_by_ordinary_words_yield_no_name() {
    assert_eq!(name_of("Patient: Hello, I'm here about my back."), None);
    assert_eq!(name_of("Patient: Hi, My neck hurts."), None);
    assert_eq!(name_of("Patient: Good morning, It's been rough."), None);
    assert_eq!(name_of("Doctor: Good morning, Sam."), Some("Sam".to_string()));
}

#[test]
fn summary_fields_follow_entities() {
    let lexicon = Lexicon::builtin().unwrap();
    let turns = segment(FOLLOW_UP, &SpeakerLabels::default());
    let entities = extract_entities(&turns, &lexicon, 0.35, None);
    let summary = summarize(&turns, &entities, &lexicon);

    assert_eq!(summary.patient_name, "Ms. Jones");
    assert_eq!(summary.symptoms, vec!["Discomfort"]);
    assert_eq!(summary.diagnosis, "Whiplash injury");
    assert_eq!(summary.treatment, vec!["Physiotherapy", "Painkillers"]);
    assert_eq!(
        summary.current_status,
        "I'm doing better, but I still have some discomfort now and then"
    );
    assert_eq!(summary.prognosis, NOT_MENTIONED);
}

#[test]
fn latest_ongoing_symptom_turn_sets_current_status() {
    let lexicon = Lexicon::builtin().unwrap();
    let transcript = "Patient: My neck pain is still there most mornings.\n\
                      Doctor: And the back?\n\
                      Patient: Work was fine. I still get back pain after long drives.";
    let turns = segment(transcript, &SpeakerLabels::default());
    let entities = extract_entities(&turns, &lexicon, 0.35, None);
    let status = current_status(&turns, &entities, &lexicon).unwrap();
    assert_eq!(status, "I still get back pain after long drives");
    assert!(status.to_lowercase().contains("back pain"));
}

#[test]
fn no_evidence_means_sentinels() {
    let lexicon = Lexicon::builtin().unwrap();
    let turns = segment("Doctor: Please take a seat.", &SpeakerLabels::default());
    let summary = summarize(&turns, &[], &lexicon);
    assert_eq!(summary.patient_name, NOT_MENTIONED);
    assert_eq!(summary.symptoms, vec![NOT_MENTIONED]);
    assert_eq!(summary.treatment, vec![NOT_MENTIONED]);
    assert_eq!(summary.current_status, NOT_MENTIONED);
}

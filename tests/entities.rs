use physician_notetaker::nlp::{
    lexicon::Lexicon,
    ner::extract_entities,
    scorer::{ScoredEntity, Scorer},
    segment::{segment, SpeakerLabels},
    types::Category,
};

const FLOOR: f64 = 0.35;

fn entities_for(transcript: &str, floor: f64) -> Vec<physician_notetaker::nlp::types::Entity> {
    let lexicon = Lexicon::builtin().expect("builtin lexicon");
    let turns = segment(transcript, &SpeakerLabels::default());
    extract_entities(&turns, &lexicon, floor, None)
}

#[test]
fn overlapping_symptoms_merge_to_longest_label() {
    let entities = entities_for(
        "Doctor: How are you?\nPatient: My neck and back hurt after a car accident.",
        FLOOR,
    );
    assert_eq!(entities.len(), 1);
    let symptom = &entities[0];
    assert_eq!(symptom.category, Category::Symptom);
    assert_eq!(symptom.text, "Neck and back pain");
    assert_eq!(symptom.source_turn, 1);
    assert!((symptom.confidence - 0.9).abs() < 1e-9);
}

#[test]
fn negated_mentions_fall_below_floor() {
    let entities = entities_for("Patient: I don't have any headaches now.", FLOOR);
    assert!(entities.is_empty());
}

#[test]
fn intensity_cues_raise_confidence_up_to_one() {
    let entities = entities_for("Patient: I get really bad headaches.", FLOOR);
    assert_eq!(entities[0].text, "Headache");
    assert!((entities[0].confidence - 1.0).abs() < 1e-9);
}

#[test]
fn symptoms_after_unrecognised_labels_stay_with_the_patient() {
    let entities = entities_for(
        "Patient: Let me go week by week.\nFirst week: my neck hurts a lot.",
        FLOOR,
    );
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].text, "Neck pain");
    assert_eq!(entities[0].source_turn, 0);
}

#[test]
fn doctor_turns_are_not_scanned() {
    assert!(entities_for("Doctor: You have whiplash and back pain.", FLOOR).is_empty());
}

#[test]
fn repeated_entities_accumulate_mentions() {
    let entities = entities_for(
        "Patient: I had physiotherapy.\nDoctor: Good.\nPatient: The physiotherapy helped.",
        FLOOR,
    );
    assert_eq!(entities.len(), 1);
    let turns: Vec<usize> = entities[0].mentions.iter().map(|m| m.turn).collect();
    assert_eq!(turns, vec![0, 2]);
    assert_eq!(entities[0].source_turn, 0);
}

#[test]
fn floor_drops_weak_entities() {
    assert!(entities_for("Patient: I have some stiffness.", 0.9).is_empty());
    assert_eq!(entities_for("Patient: I have some stiffness.", FLOOR).len(), 1);
}

struct FixedScorer;

impl Scorer for FixedScorer {
    fn name(&self) -> &str {
        "fixed"
    }

    fn entities(&self, _text: &str) -> Vec<ScoredEntity> {
        vec![
            ScoredEntity {
                category: Category::Symptom,
                text: "Tension headache".into(),
                start: 9,
                end: 17,
                confidence: 0.95,
            },
            ScoredEntity {
                category: Category::Diagnosis,
                text: "Out of range".into(),
                start: 50,
                end: 60,
                confidence: 0.99,
            },
        ]
    }
}

#[test]
fn scorer_candidates_merge_with_lexicon_matches() {
    let lexicon = Lexicon::builtin().expect("builtin lexicon");
    let turns = segment("Patient: I have a headache.", &SpeakerLabels::default());
    let entities = extract_entities(&turns, &lexicon, FLOOR, Some(&FixedScorer));
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].text, "Headache");
    assert!((entities[0].confidence - 0.95).abs() < 1e-9);
}

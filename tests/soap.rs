use physician_notetaker::{
    config::Settings,
    nlp::{
        soap::{self, NO_EXAM_FINDINGS, NO_OBSERVATIONS},
        types::{ClassificationResult, Intent, Sentiment, NOT_MENTIONED},
    },
    Pipeline,
};

const FOLLOW_UP: &str = include_str!("fixtures/whiplash_followup.txt");

fn labelled(sentiments: &[Sentiment]) -> Vec<ClassificationResult> {
    sentiments
        .iter()
        .enumerate()
        .map(|(turn, sentiment)| ClassificationResult {
            turn,
            sentiment: *sentiment,
            intent: Intent::ProvidingInformation,
            confidence: 1.0,
            sentiment_confidence: 1.0,
            intent_confidence: 1.0,
            secondary_intents: Vec::new(),
            indicators: Vec::new(),
            evidence: Vec::new(),
        })
        .collect()
}

#[test]
fn severity_needs_a_strict_anxious_majority() {
    use Sentiment::*;
    assert_eq!(soap::severity(&labelled(&[Anxious, Anxious, Neutral])), "Moderate, monitor");
    assert_eq!(soap::severity(&labelled(&[Anxious, Reassured])), "Mild, improving");
    assert_eq!(soap::severity(&[]), NOT_MENTIONED);
}

#[test]
fn note_draws_objective_from_doctor_turns_only() {
    let pipeline = Pipeline::new(Settings::default()).unwrap();
    let note = pipeline.analyze(FOLLOW_UP).unwrap().soap_note;

    assert_eq!(note.subjective.chief_complaint, "Discomfort");
    assert!(note
        .subjective
        .history_of_present_illness
        .starts_with("I'm doing better"));
    assert!(note
        .subjective
        .history_of_present_illness
        .contains("whiplash injury"));
    assert_eq!(
        note.objective.physical_exam,
        "Your neck and back have a full range of movement and there is no tenderness."
    );
    assert_eq!(note.objective.observations, NO_OBSERVATIONS);
    assert_eq!(note.assessment.diagnosis, "Whiplash injury");
    assert_eq!(note.assessment.severity, "Mild, improving");
    assert_eq!(note.plan.treatment, "Physiotherapy, Painkillers");
    assert_eq!(note.plan.follow_up, soap::FOLLOW_UP);
}

#[test]
fn prognosis_extends_follow_up() {
    let pipeline = Pipeline::new(Settings::default()).unwrap();
    let note = pipeline
        .analyze("Patient: The doctor said I should make a full recovery.")
        .unwrap()
        .soap_note;
    assert!(note.plan.follow_up.ends_with("Expected course: Full recovery expected."));
}

#[test]
fn exam_announcements_are_not_findings() {
    let pipeline = Pipeline::new(Settings::default()).unwrap();
    let note = pipeline
        .analyze(
            "Doctor: Let's go ahead and do a physical examination to check your mobility and overall health.\n\
             Patient: Sure.",
        )
        .unwrap()
        .soap_note;
    assert_eq!(note.objective.physical_exam, NO_EXAM_FINDINGS);

    let note = pipeline
        .analyze(
            "Doctor: Let's do a physical examination. Your spine has full range of motion and no tenderness.\n\
             Patient: Good.",
        )
        .unwrap()
        .soap_note;
    assert_eq!(
        note.objective.physical_exam,
        "Your spine has full range of motion and no tenderness."
    );
}

use physician_notetaker::{
    config::Settings,
    nlp::{
        summarize::NO_NARRATIVE,
        types::{Category, Intent, Sentiment, NOT_MENTIONED},
    },
    AnalysisError, Pipeline,
};

const FOLLOW_UP: &str = include_str!("fixtures/whiplash_followup.txt");

fn pipeline() -> Pipeline {
    Pipeline::new(Settings::default()).expect("pipeline")
}

#[test]
fn neck_and_back_complaint() {
    let result = pipeline()
        .analyze("Doctor: How are you?\nPatient: My neck and back hurt after a car accident.")
        .unwrap();

    let symptom = result
        .entities
        .iter()
        .find(|e| e.category == Category::Symptom)
        .expect("symptom entity");
    let text = symptom.text.to_lowercase();
    assert!(text.contains("neck") && text.contains("back"));
    assert!(symptom.confidence > 0.35);

    assert_eq!(result.sentiment_intent.len(), 1);
    assert!(matches!(
        result.sentiment_intent[0].sentiment,
        Sentiment::Anxious | Sentiment::Neutral
    ));
    assert!(result
        .soap_note
        .subjective
        .chief_complaint
        .to_lowercase()
        .contains("neck"));
}

#[test]
fn doctor_only_transcript_is_all_sentinels() {
    let result = pipeline()
        .analyze("Doctor: Please take a seat.\nDoctor: Let me know when you are ready.")
        .unwrap();

    assert!(result.entities.is_empty());
    assert!(result.sentiment_intent.is_empty());
    let summary = &result.structured_summary;
    assert_eq!(summary.patient_name, NOT_MENTIONED);
    assert_eq!(summary.symptoms, vec![NOT_MENTIONED]);
    assert_eq!(summary.diagnosis, NOT_MENTIONED);
    assert_eq!(summary.treatment, vec![NOT_MENTIONED]);
    assert_eq!(summary.current_status, NOT_MENTIONED);
    assert_eq!(summary.prognosis, NOT_MENTIONED);

    let note = &result.soap_note;
    assert_eq!(note.subjective.chief_complaint, NOT_MENTIONED);
    assert_eq!(note.assessment.severity, NOT_MENTIONED);
    assert_eq!(note.plan.treatment, NOT_MENTIONED);
}

#[test]
fn worried_patient_seeks_reassurance() {
    let result = pipeline()
        .analyze("Patient: I'm worried about my back pain, but I hope it gets better.")
        .unwrap();
    let label = &result.sentiment_intent[0];
    assert_eq!(label.sentiment, Sentiment::Anxious);
    assert_eq!(label.intent, Intent::SeekingReassurance);
    assert!(label.confidence > 0.0);
}

#[test]
fn output_uses_fixed_field_names() {
    let result = pipeline().analyze(FOLLOW_UP).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    for key in [
        "entities",
        "structured_summary",
        "keywords",
        "sentiment_intent",
        "overall_sentiment",
        "intent_summary",
        "soap_note",
        "narrative",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    for key in ["Patient_Name", "Symptoms", "Diagnosis", "Treatment", "Current_Status", "Prognosis"] {
        assert!(json["structured_summary"].get(key).is_some(), "missing {key}");
    }
    for key in ["Subjective", "Objective", "Assessment", "Plan"] {
        assert!(json["soap_note"].get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["sentiment_intent"][2]["Intent"], "Seeking reassurance");
    assert!(json["sentiment_intent"][2]["Evidence"].is_array());
    assert!(json["sentiment_intent"][2]["Secondary_Intents"].is_array());
    assert_eq!(json["intent_summary"]["Total_Statements"], 3);
}

#[test]
fn narrative_quotes_leading_patient_sentences() {
    let result = pipeline().analyze(FOLLOW_UP).unwrap();
    assert!(result.narrative.starts_with("I'm doing better, but I still have some discomfort"));
    assert!(result.narrative.ends_with("Will this affect me in the future?"));
    assert!(!result.narrative.contains("range of movement"));

    let result = pipeline().analyze("Doctor: Please take a seat.").unwrap();
    assert_eq!(result.narrative, NO_NARRATIVE);
    assert_eq!(result.overall_sentiment.sentiment, Sentiment::Neutral);
    assert_eq!(result.intent_summary.total_statements, 0);
}

#[test]
fn invalid_input_is_rejected_before_analysis() {
    assert!(matches!(pipeline().analyze(""), Err(AnalysisError::Input(_))));
    assert!(matches!(
        pipeline().analyze("Patient: hi\u{0}"),
        Err(AnalysisError::Input(_))
    ));
    assert!(matches!(
        physician_notetaker::nlp::decode_transcript(vec![0xff, 0xfe]),
        Err(AnalysisError::Input(_))
    ));
}

#[tokio::test]
async fn parallel_and_sequential_agree() {
    let pipeline = pipeline();
    let sequential = pipeline.analyze(FOLLOW_UP).unwrap();
    let parallel = pipeline.analyze_parallel(FOLLOW_UP).await.unwrap();
    assert_eq!(sequential, parallel);
}

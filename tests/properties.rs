use physician_notetaker::{
    config::Settings,
    nlp::segment::{segment, SpeakerLabels},
    Pipeline,
};
use proptest::prelude::*;

fn speaker() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Doctor"), Just("Patient"), Just("Nurse")]
}

fn utterance() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("my"),
            Just("neck"),
            Just("back"),
            Just("pain"),
            Just("really"),
            Just("not"),
            Just("worried"),
            Just("physiotherapy"),
            Just("still"),
            Just("whiplash"),
            Just("better"),
            Just("?"),
            Just("."),
            Just(","),
        ],
        1..12,
    )
    .prop_map(|words| words.join(" "))
}

fn transcript() -> impl Strategy<Value = Vec<(&'static str, String)>> {
    prop::collection::vec((speaker(), utterance()), 1..8)
}

fn render(lines: &[(&str, String)]) -> String {
    lines
        .iter()
        .map(|(who, text)| format!("{who}: {text}"))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn one_turn_per_recognised_label(lines in transcript()) {
        let text = render(&lines);
        let labels = SpeakerLabels::default();
        let turns = segment(&text, &labels);
        let recognised = lines.iter().filter(|(who, _)| *who != "Nurse").count();
        let leading_unknown = usize::from(lines[0].0 == "Nurse");
        prop_assert_eq!(turns.len(), recognised + leading_unknown);
        prop_assert_eq!(turns, segment(&text, &labels));
    }

    #[test]
    fn outputs_stay_in_bounds(lines in transcript(), top_k in 0usize..6) {
        let settings = Settings { top_k, ..Settings::default() };
        let pipeline = Pipeline::new(settings).unwrap();
        let text = render(&lines);
        let turn_count = pipeline.segment(&text).len();
        let result = pipeline.analyze(&text).unwrap();

        for entity in &result.entities {
            prop_assert!((0.0..=1.0).contains(&entity.confidence));
            prop_assert!(entity.source_turn < turn_count);
        }
        for label in &result.sentiment_intent {
            prop_assert!((0.0..=1.0).contains(&label.confidence));
        }
        prop_assert!(result.keywords.len() <= top_k);
        prop_assert!(!result.structured_summary.symptoms.is_empty());
    }
}

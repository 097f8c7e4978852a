use std::collections::HashMap;

use physician_notetaker::{
    config::{Settings, DEFAULT_CONFIDENCE_FLOOR, DEFAULT_TOP_K},
    AnalysisError,
};

fn settings_from(vars: &[(&str, &str)]) -> Result<Settings, AnalysisError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let settings = settings_from(&[]).unwrap();
    assert_eq!(settings.top_k, DEFAULT_TOP_K);
    assert_eq!(settings.confidence_floor, DEFAULT_CONFIDENCE_FLOOR);
    assert!(settings.lexicon_path.is_none());
    assert!(!settings.ml_scorer);
}

#[test]
fn environment_values_override_defaults() {
    let settings = settings_from(&[
        ("KEYWORD_TOP_K", "3"),
        ("ENTITY_CONFIDENCE_FLOOR", "0.5"),
        ("PATIENT_LABELS", "Patient, Client"),
        ("ML_SCORER_ENABLED", "true"),
    ])
    .unwrap();
    assert_eq!(settings.top_k, 3);
    assert_eq!(settings.confidence_floor, 0.5);
    assert_eq!(settings.patient_labels, vec!["Patient", "Client"]);
    assert!(settings.ml_scorer);
}

#[test]
fn invalid_values_are_configuration_errors() {
    for vars in [
        [("KEYWORD_TOP_K", "-1")],
        [("KEYWORD_TOP_K", "many")],
        [("ENTITY_CONFIDENCE_FLOOR", "1.5")],
        [("ML_SCORER_ENABLED", "maybe")],
        [("DOCTOR_LABELS", " , ")],
        [("PATIENT_LABELS", "doctor")],
    ] {
        assert!(
            matches!(settings_from(&vars), Err(AnalysisError::Configuration(_))),
            "{vars:?} should be rejected"
        );
    }
}

#[test]
fn command_line_overrides_are_validated() {
    let settings = Settings::default();
    assert!(matches!(
        settings.clone().with_overrides(Some(-3), None),
        Err(AnalysisError::Configuration(_))
    ));
    let tuned = settings.with_overrides(Some(0), Some(0.6)).unwrap();
    assert_eq!(tuned.top_k, 0);
    assert_eq!(tuned.confidence_floor, 0.6);
}

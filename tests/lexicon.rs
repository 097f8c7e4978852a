use std::sync::Arc;

use physician_notetaker::{
    config::Settings,
    data::vocabulary::builtin_bundle,
    nlp::{
        lexicon::{Lexicon, LexiconBundle, LexiconEntry},
        types::Category,
    },
    AnalysisError, Pipeline,
};

#[test]
fn builtin_lexicon_covers_every_category() {
    let lexicon = Lexicon::builtin().unwrap();
    for category in Category::ALL {
        assert!(lexicon.entries_in(category).count() > 0, "{category:?}");
    }
    assert!(lexicon.is_stopword("the"));
    assert!(lexicon.is_vocabulary("whiplash"));
}

#[test]
fn exported_bundle_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.json");
    let bundle = Lexicon::builtin().unwrap().bundle().clone();
    std::fs::write(&path, serde_json::to_string_pretty(&bundle).unwrap()).unwrap();

    let loaded = Lexicon::from_path(&path).unwrap();
    assert_eq!(loaded.bundle(), &bundle);
    assert_eq!(loaded.entries().len(), bundle.entries.len());
}

#[test]
fn malformed_or_missing_files_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(Lexicon::from_path(&path), Err(AnalysisError::LexiconLoad(_))));
    assert!(matches!(
        Lexicon::from_path(&dir.path().join("absent.json")),
        Err(AnalysisError::LexiconLoad(_))
    ));

    let settings = Settings {
        lexicon_path: Some(dir.path().join("absent.json")),
        ..Settings::default()
    };
    assert!(matches!(Pipeline::new(settings), Err(AnalysisError::LexiconLoad(_))));
}

#[test]
fn invalid_entries_are_rejected() {
    let mut bundle = builtin_bundle();
    bundle.entries[0].weight = 1.5;
    assert!(matches!(Lexicon::compile(bundle), Err(AnalysisError::LexiconLoad(_))));

    let mut bundle = builtin_bundle();
    bundle.entries.clear();
    assert!(matches!(Lexicon::compile(bundle), Err(AnalysisError::LexiconLoad(_))));

    let mut bundle = builtin_bundle();
    bundle.intent_cues[0].pattern = "(unclosed".into();
    assert!(matches!(Lexicon::compile(bundle), Err(AnalysisError::LexiconLoad(_))));
}

#[test]
fn custom_lexicon_drives_extraction() {
    let bundle = LexiconBundle {
        entries: vec![LexiconEntry {
            category: Category::Symptom,
            label: "Tinnitus".into(),
            surface_forms: vec!["Ringing in my ears".into()],
            weight: 0.8,
        }],
        ..builtin_bundle()
    };
    let lexicon = Arc::new(Lexicon::compile(bundle).unwrap());
    let pipeline = Pipeline::with_lexicon(Settings::default(), lexicon).unwrap();
    let result = pipeline
        .analyze("Patient: There is a ringing in my ears and some neck pain.")
        .unwrap();
    let texts: Vec<&str> = result.entities.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Tinnitus"]);
}

use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("physician-notetaker").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn analyze_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visit.txt");
    std::fs::write(&path, include_str!("fixtures/whiplash_followup.txt")).unwrap();

    let output = Command::cargo_bin("physician-notetaker")
        .unwrap()
        .args(["analyze", "--compact", "--transcript"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["structured_summary"]["Patient_Name"], "Ms. Jones");
}

#[test]
fn empty_transcript_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "\n").unwrap();
    Command::cargo_bin("physician-notetaker")
        .unwrap()
        .args(["analyze", "--transcript"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn batch_writes_one_file_per_transcript() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    std::fs::write(input.path().join("a.txt"), "Patient: My back hurts.").unwrap();
    std::fs::write(input.path().join("b.txt"), "Patient: I have a headache.").unwrap();
    std::fs::write(input.path().join("notes.md"), "ignored").unwrap();

    Command::cargo_bin("physician-notetaker")
        .unwrap()
        .env("OUTPUTS_DIR", output.path())
        .args(["batch", "--dir"])
        .arg(input.path())
        .assert()
        .success();

    assert!(output.path().join("a.json").exists());
    assert!(output.path().join("b.json").exists());
    assert!(!output.path().join("notes.json").exists());
}

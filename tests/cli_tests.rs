use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pulse_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pulse").unwrap();
    // Keep tests offline and deterministic: no LLM path, no tracker calls.
    cmd.env_remove("ANTHROPIC_API_KEY");
    cmd.env_remove("LINEAR_API_KEY");
    cmd
}

const ROSTER: &str = r#"[
    {"id": "u1", "displayName": "Oguzhan A.", "name": "oguzhan", "email": "oguzhan.aslan@example.com", "active": true},
    {"id": "u2", "displayName": "Hakan Isik", "name": "hakan", "email": null, "active": true}
]"#;

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    pulse_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check-in note analyzer"));
}

#[test]
fn test_version() {
    pulse_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pulse"));
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn test_analyze_rejects_short_note() {
    pulse_cmd()
        .args(["analyze", "kısa not", "--member", "Furkan Yılmaz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too short"));
}

#[test]
fn test_analyze_requires_a_note_source() {
    pulse_cmd()
        .args(["analyze", "--member", "Furkan Yılmaz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provide a note"));
}

#[test]
fn test_analyze_rejects_invalid_day() {
    pulse_cmd()
        .args([
            "analyze",
            "Bugün release branch'i hazırladım.",
            "--member",
            "Furkan Yılmaz",
            "--day",
            "6",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 5"));
}

#[test]
fn test_analyze_fallback_json_output() {
    pulse_cmd()
        .args([
            "analyze",
            "Bugün release branch'i hazırladım. Yarın Yunus'tan API fix bekliyorum.",
            "--member",
            "Furkan Yılmaz",
            "--json",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ai_notes")
                .and(predicate::str::contains("Yunus"))
                .and(predicate::str::contains("Furkan"))
                .and(predicate::str::contains("😐")),
        );
}

#[test]
fn test_analyze_pretty_output_sections() {
    pulse_cmd()
        .args([
            "analyze",
            "Bugün sprint toplantısı verimli geçti. Yarın rapora başlayacak.",
            "--member",
            "Ali Kaya",
            "--week",
            "2026-W35",
            "--day",
            "3",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Mood")
                .and(predicate::str::contains("Observations"))
                .and(predicate::str::contains("Commitments"))
                .and(predicate::str::contains("2026-W35")),
        );
}

#[test]
fn test_analyze_from_note_file() {
    let temp_dir = TempDir::new().unwrap();
    let note_path = temp_dir.path().join("note.txt");
    std::fs::write(&note_path, "Bugün API entegrasyonu tamamlandı.\n").unwrap();

    pulse_cmd()
        .args([
            "analyze",
            "--note-file",
            note_path.to_str().unwrap(),
            "--member",
            "Ali Kaya",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("tamamlandı"));
}

#[test]
fn test_analyze_from_stdin() {
    pulse_cmd()
        .args(["analyze", "-", "--member", "Ali Kaya", "--json"])
        .write_stdin("Bugün dağıtım sorunsuz tamamlandı.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ai_notes"));
}

// =============================================================================
// Resolve
// =============================================================================

#[test]
fn test_resolve_with_roster_file() {
    let temp_dir = TempDir::new().unwrap();
    let roster_path = temp_dir.path().join("users.json");
    std::fs::write(&roster_path, ROSTER).unwrap();

    pulse_cmd()
        .args([
            "resolve",
            "--member",
            "Oğuzhan Aslan",
            "--users-file",
            roster_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matched").and(predicate::str::contains("Oguzhan A.")));
}

#[test]
fn test_resolve_no_match_is_success() {
    let temp_dir = TempDir::new().unwrap();
    let roster_path = temp_dir.path().join("users.json");
    std::fs::write(&roster_path, ROSTER).unwrap();

    pulse_cmd()
        .args([
            "resolve",
            "--member",
            "Zeynep Demir",
            "--users-file",
            roster_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No match"));
}

#[test]
fn test_resolve_inactive_roster_never_matches() {
    let temp_dir = TempDir::new().unwrap();
    let roster_path = temp_dir.path().join("users.json");
    std::fs::write(
        &roster_path,
        r#"[{"id": "u1", "displayName": "Oguzhan Aslan", "name": "oguzhan", "email": null, "active": false}]"#,
    )
    .unwrap();

    pulse_cmd()
        .args([
            "resolve",
            "--member",
            "Oğuzhan Aslan",
            "--users-file",
            roster_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No match"));
}

#[test]
fn test_resolve_json_no_match_prints_null() {
    let temp_dir = TempDir::new().unwrap();
    let roster_path = temp_dir.path().join("users.json");
    std::fs::write(&roster_path, "[]").unwrap();

    pulse_cmd()
        .args([
            "resolve",
            "--member",
            "Oğuzhan Aslan",
            "--users-file",
            roster_path.to_str().unwrap(),
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));
}

// =============================================================================
// Tasks
// =============================================================================

#[test]
fn test_tasks_requires_tracker_api_key() {
    pulse_cmd()
        .args(["tasks", "--member", "Oğuzhan Aslan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LINEAR_API_KEY"));
}

// =============================================================================
// Init
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    pulse_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(temp_dir.path().join(".pulse.yml").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();

    pulse_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    pulse_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

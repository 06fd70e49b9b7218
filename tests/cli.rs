#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn trainer() -> Command {
    let mut cmd = Command::cargo_bin("vocab_trainer").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn status_falls_back_when_file_missing() {
    let dir = TempDir::new().unwrap();

    trainer()
        .arg("status")
        .arg("--words")
        .arg(dir.path().join("missing.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in list"))
        .stdout(predicate::str::contains("Total:       5"))
        .stdout(predicate::str::contains("Unlearned:   5"))
        .stdout(predicate::str::contains("Learned:     0"));
}

#[test]
fn status_reads_word_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    fs::write(
        &path,
        r#"[
            {"word": "abandon", "translations": [{"translation": "to give up"}]},
            {"word": "ability", "translations": [{"translation": "skill"}], "familiarity": 1},
            {"word": "able", "familiarity": 2}
        ]"#,
    )
    .unwrap();

    trainer()
        .arg("status")
        .arg("-w")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:       3"))
        .stdout(predicate::str::contains("Learned:     2"))
        .stdout(predicate::str::contains("Unlearned:   1"));
}

#[test]
fn simple_mode_saves_progress() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");

    trainer()
        .args(["simple", "--save", "--seed", "1", "--words"])
        .arg(&path)
        .write_stdin("learn\n2\nback\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("learned (familiar)"));

    let saved = fs::read_to_string(&path).unwrap();
    assert_eq!(saved.matches("\"familiarity\": 2").count(), 1);
    assert_eq!(saved.matches("\"familiarity\": 0").count(), 4);

    trainer()
        .arg("status")
        .arg("-w")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Learned:     1"));
}

#[test]
fn save_keeps_unreadable_word_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    let original = r#"[{"word":"abandon","familiarity":2},{"word":"ability","familiarity":"1"}]"#;
    fs::write(&path, original).unwrap();

    trainer()
        .args(["simple", "--save", "--seed", "1", "--words"])
        .arg(&path)
        .write_stdin("learn\n2\nquit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to save"));

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn unreadable_word_file_still_usable_without_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, "not json").unwrap();

    trainer()
        .args(["simple", "--seed", "1", "--words"])
        .arg(&path)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye!"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
}

#[test]
fn simulate_rejects_unknown_mode() {
    trainer()
        .args(["simulate", "--mode", "shuffle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mode"));
}

#[test]
fn simulate_new_words_on_fallback() {
    let dir = TempDir::new().unwrap();

    trainer()
        .args(["simulate", "--mode", "new", "-n", "5000", "--seed", "3", "--words"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("5000 draws"))
        .stdout(predicate::str::contains("elephant"));
}

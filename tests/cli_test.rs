use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("amex-mock"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--cards-file"))
        .stdout(predicate::str::contains("--in-memory"))
        .stdout(predicate::str::contains("--port"));

    Ok(())
}

#[test]
fn test_corrupt_cards_file_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("amex_cards.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let mut cmd = Command::new(cargo_bin!("amex-mock"));
    cmd.arg("--cards-file")
        .arg(&path)
        .arg("--host")
        .arg("127.0.0.1")
        .arg("--port")
        .arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Card store at"));

    // The snapshot is left untouched for inspection.
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{ this is not json"
    );
}

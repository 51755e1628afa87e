#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn custdesk_cmd(workdir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("custdesk"));
    cmd.current_dir(workdir.path())
        .env_remove("CUSTDESK_DATABASE_URI")
        .env_remove("CUSTDESK_LOGGER_LEVEL")
        .env("NO_COLOR", "1");
    cmd
}

fn file_uri(temp: &TempDir) -> String {
    format!("file://{}", temp.path().join("customers.json").display())
}

#[test]
fn test_records_survive_across_sessions() {
    let temp = TempDir::new().unwrap();
    let uri = file_uri(&temp);

    // 1. Create a customer and quit
    custdesk_cmd(&temp)
        .env("CUSTDESK_DATABASE_URI", &uri)
        .write_stdin("1\nAda Lovelace\n36\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Connected to database..."))
        .stdout(predicate::str::contains("Customer created: Ada Lovelace"))
        .stdout(predicate::str::contains("Disconnected from database..."));

    let document = fs::read_to_string(temp.path().join("customers.json")).unwrap();
    assert!(document.contains("\"_id\""));
    assert!(document.contains("Ada Lovelace"));

    // 2. Rename it from a second session
    custdesk_cmd(&temp)
        .env("CUSTDESK_DATABASE_URI", &uri)
        .write_stdin("3\n0\n1\nGrace Hopper\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Customer updated (0): name is now Grace Hopper",
        ));

    // 3. Delete it from a third
    custdesk_cmd(&temp)
        .env("CUSTDESK_DATABASE_URI", &uri)
        .write_stdin("4\n0\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer deleted (0): Grace Hopper"))
        .stdout(predicate::str::contains("No customers found."));
}

#[test]
fn test_invalid_menu_input_is_reprompted() {
    let temp = TempDir::new().unwrap();
    custdesk_cmd(&temp)
        .env("CUSTDESK_DATABASE_URI", "memory://")
        .write_stdin("abc\n9\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input, please try again.").count(2));
}

#[test]
fn test_closed_input_ends_session() {
    let temp = TempDir::new().unwrap();
    custdesk_cmd(&temp)
        .env("CUSTDESK_DATABASE_URI", "memory://")
        .write_stdin("1\nAda\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Disconnected from database..."));
}

#[test]
fn test_database_uri_from_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("custdesk.toml"),
        "[database]\nuri = \"memory://\"\n",
    )
    .unwrap();

    custdesk_cmd(&temp)
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No customers found."));
}

#[test]
fn test_missing_database_uri_fails() {
    let temp = TempDir::new().unwrap();
    custdesk_cmd(&temp)
        .write_stdin("5\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_unsupported_database_uri_fails() {
    let temp = TempDir::new().unwrap();
    custdesk_cmd(&temp)
        .env("CUSTDESK_DATABASE_URI", "mongodb://localhost:27017")
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mongodb://localhost:27017"));
}

#[test]
fn test_corrupt_document_fails_to_connect() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("customers.json"), "{ not json").unwrap();

    custdesk_cmd(&temp)
        .env("CUSTDESK_DATABASE_URI", file_uri(&temp))
        .write_stdin("5\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Connected to database...").not());
}

use assert_cmd::Command;
use predicates::prelude::*;

fn contact_book() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("CONTACTS_LANG", "en")
        .env("CONTACTS_LOG", "off")
        .env_remove("CONTACTS_QUERY");
    cmd
}

#[test]
fn add_contact() {
    contact_book()
        .write_stdin("add\nAlice\n08031234567\nalice@example.com\n12 Main street\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Add contact (* to go back)"))
        .stdout(predicate::str::contains("Contact added successfully"))
        .stdout(predicate::str::contains("  1. Alice"))
        .stdout(predicate::str::contains("12 Main street"))
        .stdout(predicate::str::contains("Bye!"));
}

#[test]
fn add_accepts_any_text() {
    // no format validation on any field
    contact_book()
        .write_stdin("add\n123\nnot a number\nfoo@bar\n\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"))
        .stdout(predicate::str::contains("  1. 123"));
}

#[test]
fn going_back_adds_nothing() {
    contact_book()
        .write_stdin("add\nAlice\n*\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing changed"))
        .stdout(predicate::str::contains("No contact yet"))
        .stdout(predicate::str::contains("Contact added successfully").not());
}

#[test]
fn invalid_inputs() {
    contact_book()
        .write_stdin("and\nedit\ndelete abc\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unrecognized command: 'and'"))
        .stderr(predicate::str::contains("Row number required"))
        .stderr(predicate::str::contains("Invalid number format"));
}

#[test]
fn unknown_language_is_rejected() {
    contact_book()
        .args(["--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'fr'"));
}

#[test]
fn invalid_log_filter_is_rejected() {
    contact_book()
        .args(["--log", "contact_book=loudest"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error: invalid log filter"));
}

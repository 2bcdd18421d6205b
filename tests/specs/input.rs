//! Specs for text input and word list files.

use crate::prelude::*;

/// Text is read from stdin when no argument is given
#[test]
fn reads_text_from_stdin() {
    let temp = Project::with_categories();
    wordgate(&["mask"])
        .pwd(temp.path())
        .stdin("buy spam now\n")
        .passes()
        .stdout_eq("buy **** now\n");
}

/// `-` also means stdin
#[test]
fn dash_reads_stdin() {
    let temp = Project::with_categories();
    wordgate(&["check", "-"])
        .pwd(temp.path())
        .stdin("a scam")
        .exits(1)
        .stdout_eq("fraud\n");
}

/// Blank stdin is rejected like a blank argument
#[test]
fn blank_stdin_exits_2() {
    let temp = Project::with_categories();
    wordgate(&["match"])
        .pwd(temp.path())
        .stdin("\n")
        .exits(2)
        .stderr_has("must not be blank");
}

/// Word files skip comments and blank lines; the file stem names the category
#[test]
fn word_file_format() {
    let temp = Project::empty();
    let words = temp.file("profanity.txt", "# header\n\n  darn  \nheck\n");
    wordgate(&["check", "-w", words.to_str().unwrap(), "oh heck"])
        .pwd(temp.path())
        .exits(1)
        .stdout_eq("profanity\n");
}

/// --words adds categories alongside the config's
#[test]
fn word_files_extend_config() {
    let temp = Project::with_categories();
    let extra = temp.file("extra/drugs.txt", "weed\n");
    wordgate(&["check", "-w", extra.to_str().unwrap(), "spam weed"])
        .pwd(temp.path())
        .exits(1)
        .stdout_eq("ads\ndrugs\n");
}

/// A list whose words are all too short cannot build a filter
#[test]
fn rejected_word_list_exits_2() {
    let temp = Project::empty();
    let words = temp.file("tiny.txt", "a\nb\n");
    wordgate(&["check", "-w", words.to_str().unwrap(), "abc"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("failed to build");
}

#[test]
fn missing_word_file_exits_3() {
    let temp = Project::empty();
    wordgate(&["check", "-w", "absent.txt", "abc"])
        .pwd(temp.path())
        .exits(3)
        .stderr_has("absent.txt");
}

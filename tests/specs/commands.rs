//! Specs for check, match, highlight and mask.

use crate::prelude::*;

// =============================================================================
// CHECK
// =============================================================================

/// check exits 1 and names each category with a match
#[test]
fn check_reports_hit_categories() {
    let temp = Project::with_categories();
    wordgate(&["check", "this spam is a scam"])
        .pwd(temp.path())
        .exits(1)
        .stdout_eq("ads\nfraud\n");
}

/// check exits 0 with no output on clean text
#[test]
fn check_clean_text_passes() {
    let temp = Project::with_categories();
    wordgate(&["check", "perfectly fine"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("");
}

/// Blank text is a validation error (exit 2)
#[test]
fn check_blank_text_exits_2() {
    let temp = Project::with_categories();
    wordgate(&["check", "   "])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("text must not be blank");
}

/// Without any word list there is nothing to check against
#[test]
fn check_without_word_lists_exits_2() {
    let temp = Project::empty();
    wordgate(&["check", "spam"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("no word lists given");
}

/// Every backend agrees on exact words
#[test]
fn check_with_every_backend() {
    let temp = Project::with_categories();
    for backend in ["automaton", "hash-bucket", "charset", "bit-signature", "fuzzy-hash"] {
        wordgate(&["check", "--backend", backend, "a phishing mail"])
            .pwd(temp.path())
            .exits(1)
            .stdout_eq("fraud\n");
    }
}

// =============================================================================
// MATCH
// =============================================================================

/// match prints the sorted union of found words
#[test]
fn match_prints_words() {
    let temp = Project::with_categories();
    wordgate(&["match", "scam, spam and junk mail"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("junk mail\nscam\nspam\n");
}

/// Thorough mode reports nested words; greedy stops at the first
#[test]
fn match_mode_contrast() {
    let temp = Project::empty();
    let words = temp.file("t.txt", "test\ntesting\n");
    let words = words.to_str().unwrap();

    wordgate(&["match", "-w", words, "this is a testing"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("test\ntesting\n");
    wordgate(&["match", "-w", words, "--mode", "greedy", "this is a testing"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("test\n");
}

/// Overlapping words are both reported
#[test]
fn match_reports_overlaps() {
    let temp = Project::empty();
    let words = temp.file("o.txt", "abc\nbcd\n");
    wordgate(&["match", "-w", words.to_str().unwrap(), "xabcdx"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("abc\nbcd\n");
}

/// JSON output carries backend, mode and per-category words
#[test]
fn match_json_output() {
    let temp = Project::with_categories();
    let run = wordgate(&["match", "-o", "json", "--backend", "trie", "spam scam"])
        .pwd(temp.path())
        .passes();
    let json = run.json();

    assert_eq!(json["backend"], "automaton");
    assert_eq!(json["mode"], "thorough");
    assert_eq!(json["words"], serde_json::json!(["scam", "spam"]));
    assert_eq!(json["categories"][0]["category"], "ads");
    assert_eq!(json["categories"][0]["filter"], "automaton|ads");
    assert_eq!(json["categories"][1]["words"], serde_json::json!(["scam"]));
}

// =============================================================================
// HIGHLIGHT AND MASK
// =============================================================================

#[test]
fn highlight_wraps_words() {
    let temp = Project::with_categories();
    wordgate(&["highlight", "no spam"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("no <font color='red'>spam</font>\n");
}

/// Highlight markup comes from the config file
#[test]
fn highlight_uses_configured_markup() {
    let temp = Project::empty();
    temp.config("[highlight]\nopen = \"[\"\nclose = \"]\"\n\n[[category]]\nname = \"a\"\nwords = [\"spam\"]\n");
    wordgate(&["highlight", "no spam"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("no [spam]\n");
}

#[test]
fn mask_replaces_each_character() {
    let temp = Project::with_categories();
    wordgate(&["mask", "junk mail is a scam"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("********* is a ****\n");
}

/// Mask length follows characters, not bytes
#[test]
fn mask_counts_characters() {
    let temp = Project::empty();
    let words = temp.file("zh.txt", "敏感词\n");
    wordgate(&["mask", "--mask", "#", "-w", words.to_str().unwrap(), "这是敏感词吗"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("这是###吗\n");
}

/// The longest word wins by default; shortest-first is configurable
#[test]
fn mask_replacement_policy() {
    let temp = Project::empty();
    temp.config("[[category]]\nname = \"t\"\nwords = [\"test\", \"testing\"]\n");
    wordgate(&["mask", "a testing"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("a *******\n");

    temp.config(
        "[engine]\npolicy = \"shortest-first\"\n\n[[category]]\nname = \"t\"\nwords = [\"test\", \"testing\"]\n",
    );
    wordgate(&["mask", "a testing"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("a ****ing\n");
}

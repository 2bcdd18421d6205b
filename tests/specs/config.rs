//! Specs for config discovery and validation.

use crate::prelude::*;

/// wordgate.toml in the working directory is picked up automatically
#[test]
fn config_discovered_in_working_dir() {
    let temp = Project::with_categories();
    wordgate(&["check", "spam"]).pwd(temp.path()).exits(1);
}

/// -C points at a config outside the working directory
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    let config = temp.file("conf/custom.toml", "version = 1\n\n[[category]]\nname = \"x\"\nwords = [\"spam\"]\n");
    wordgate(&["check", "-C", config.to_str().unwrap(), "spam"])
        .pwd(temp.path())
        .exits(1)
        .stdout_eq("x\n");
}

/// WORDGATE_CONFIG works like -C
#[test]
fn config_from_environment() {
    let temp = Project::empty();
    let config = temp.file("elsewhere.toml", "version = 1\n\n[[category]]\nname = \"env\"\nwords = [\"spam\"]\n");
    wordgate(&["check", "spam"])
        .pwd(temp.path())
        .env("WORDGATE_CONFIG", config.to_str().unwrap())
        .exits(1)
        .stdout_eq("env\n");
}

#[test]
fn missing_explicit_config_exits_2() {
    let temp = Project::empty();
    wordgate(&["check", "-C", "nope.toml", "spam"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn unsupported_version_exits_2() {
    let temp = Project::empty();
    temp.file("wordgate.toml", "version = 7\n");
    wordgate(&["check", "spam"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 7");
}

#[test]
fn missing_version_exits_2() {
    let temp = Project::empty();
    temp.file("wordgate.toml", "[engine]\nbackend = \"automaton\"\n");
    wordgate(&["check", "spam"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("missing required field: version");
}

/// Unknown keys are reported but do not stop the run
#[test]
fn unknown_key_warns() {
    let temp = Project::with_categories();
    temp.config(
        "colour = \"red\"\n\n[[category]]\nname = \"ads\"\nwords = [\"spam\"]\n",
    );
    wordgate(&["check", "spam"])
        .pwd(temp.path())
        .exits(1)
        .stderr_has("unrecognized field `colour` (ignored)");
}

/// Misspelled backends get a suggestion
#[test]
fn unknown_backend_suggests_name() {
    let temp = Project::empty();
    temp.config("[engine]\nbackend = \"hash\"\n");
    wordgate(&["check", "spam"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("Did you mean `hash-bucket`?");
}

/// The configured backend is used unless a flag overrides it
#[test]
fn configured_backend_and_flag_override() {
    let temp = Project::empty();
    temp.config("[engine]\nbackend = \"charset\"\n\n[[category]]\nname = \"a\"\nwords = [\"spam\"]\n");
    let run = wordgate(&["match", "-o", "json", "spam"]).pwd(temp.path()).passes();
    assert_eq!(run.json()["backend"], "charset");

    let run = wordgate(&["match", "-o", "json", "-b", "ttmp", "spam"])
        .pwd(temp.path())
        .passes();
    assert_eq!(run.json()["backend"], "bit-signature");
}

/// Configured mask character applies to `mask`
#[test]
fn configured_mask_character() {
    let temp = Project::empty();
    temp.config("[engine]\nmask = \"#\"\n\n[[category]]\nname = \"a\"\nwords = [\"spam\"]\n");
    wordgate(&["mask", "no spam"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("no ####\n");
}

/// A category with several files needs a name
#[test]
fn unnamed_multi_file_category_exits_2() {
    let temp = Project::empty();
    temp.file("a.txt", "spam\n");
    temp.file("b.txt", "scam\n");
    temp.config("[[category]]\nfiles = [\"a.txt\", \"b.txt\"]\n");
    wordgate(&["check", "spam"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("needs a name");
}

/// Word files listed in config must exist
#[test]
fn missing_word_file_is_io_error() {
    let temp = Project::empty();
    temp.config("[[category]]\nfiles = [\"gone.txt\"]\n");
    wordgate(&["check", "spam"])
        .pwd(temp.path())
        .exits(3)
        .stderr_has("gone.txt");
}

/// Backend flags take names and aliases only, not suggestions
#[test]
fn unknown_backend_flag_exits_2() {
    let temp = Project::with_categories();
    wordgate(&["check", "-b", "bitmap", "spam"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("bitmap");
}

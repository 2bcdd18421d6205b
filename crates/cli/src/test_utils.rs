// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use crate::backend::Backend;
use crate::scan::{MatchMode, ScanText};
use crate::words::WordSet;

/// Word set with a fixed test category.
pub fn word_set(words: &[&str]) -> WordSet {
    WordSet::new("test", words.iter().copied()).unwrap()
}

/// Word set under an explicit category.
pub fn category(name: &str, words: &[&str]) -> WordSet {
    WordSet::new(name, words.iter().copied()).unwrap()
}

/// Every word reported by a full scan, in report order.
pub fn scan_all(backend: &dyn Backend, text: &str, mode: MatchMode) -> Vec<String> {
    let text = ScanText::new(text);
    let mut found = Vec::new();
    let _ = backend.scan(&text, mode, &mut |word| {
        found.push(word.to_string());
        ControlFlow::Continue(())
    });
    found
}

/// Writes `content` to `dir/name` and returns the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

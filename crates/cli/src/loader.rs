// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Newline-delimited word lists.

use std::path::Path;

use crate::error::{Error, Result};
use crate::words::WordSet;

/// Words in `content`, one per line.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read the word list at `path`.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let words = parse_words(&content);
    tracing::debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load `path` as a word set, named `category` or else the file stem.
pub fn load_word_file(path: &Path, category: Option<&str>) -> Result<WordSet> {
    let category = match category {
        Some(name) => name.to_string(),
        None => file_category(path)?,
    };
    WordSet::new(category, read_words(path)?)
}

/// Category implied by a word file's name.
pub fn file_category(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            Error::Argument(format!(
                "cannot derive a category from {}",
                path.display()
            ))
        })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named word sets, the input every backend compiles.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// An immutable category label paired with its deduplicated words.
///
/// Words are stored as given; trimming and length policy belong to the
/// backend that compiles the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    category: String,
    words: BTreeSet<String>,
}

impl WordSet {
    /// Create a word set, rejecting an empty category or word collection.
    pub fn new<C, I, S>(category: C, words: I) -> Result<Self>
    where
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let category = category.into();
        if category.is_empty() {
            return Err(Error::EmptyCategory);
        }

        let words: BTreeSet<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(Error::EmptyWords { category });
        }

        Ok(Self { category, words })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Trimmed, non-blank words with at least `min_len` characters.
    pub(crate) fn eligible(&self, min_len: usize) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(|w| w.trim())
            .filter(move |w| !w.is_empty() && w.chars().count() >= min_len)
    }
}

#[cfg(test)]
#[path = "words_tests.rs"]
mod tests;

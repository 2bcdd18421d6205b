// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character-set pruned backend.
//!
//! Any character outside the set of characters used by the word list ends a
//! candidate, so most ordinary text is rejected with a single set lookup.

use std::collections::HashSet;
use std::ops::ControlFlow;

use super::{Backend, BackendKind, MIN_WORD_LEN};
use crate::error::BuildError;
use crate::scan::{Probe, ScanText};
use crate::words::WordSet;

#[derive(Debug)]
pub struct CharsetScan {
    chars: HashSet<char>,
    words: HashSet<String>,
    max_len: usize,
}

impl CharsetScan {
    pub fn build(set: &WordSet) -> Result<Self, BuildError> {
        let mut chars = HashSet::new();
        let mut words = HashSet::new();
        let mut max_len = 0;

        for word in set.eligible(MIN_WORD_LEN) {
            chars.extend(word.chars());
            max_len = max_len.max(word.chars().count());
            words.insert(word.to_string());
        }

        if words.is_empty() {
            return Err(BuildError::NoEligibleWords {
                min_len: MIN_WORD_LEN,
            });
        }

        Ok(Self {
            chars,
            words,
            max_len,
        })
    }
}

impl Probe for CharsetScan {
    fn probe(
        &self,
        text: &ScanText<'_>,
        start: usize,
        hit: &mut dyn FnMut(usize) -> ControlFlow<()>,
    ) {
        if !self.chars.contains(&text.char_at(start)) {
            return;
        }

        let limit = text.len().min(start + self.max_len);
        for next in start + 1..limit {
            if !self.chars.contains(&text.char_at(next)) {
                return;
            }
            let end = next + 1;
            if self.words.contains(text.slice(start, end)) && hit(end).is_break() {
                return;
            }
        }
    }
}

impl Backend for CharsetScan {
    fn kind(&self) -> BackendKind {
        BackendKind::CharsetScan
    }

    fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
#[path = "charset_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Two-level hash bucket backend: first character, then word length.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::ControlFlow;

use super::{Backend, BackendKind, MIN_WORD_LEN};
use crate::error::BuildError;
use crate::scan::{Probe, ScanText};
use crate::words::WordSet;

/// Words keyed by first character, then by character length.
///
/// Lengths are kept ordered so probes run shortest first.
#[derive(Debug)]
pub struct HashBucket {
    buckets: HashMap<char, BTreeMap<usize, HashSet<String>>>,
    words: usize,
}

impl HashBucket {
    pub fn build(set: &WordSet) -> Result<Self, BuildError> {
        let mut buckets: HashMap<char, BTreeMap<usize, HashSet<String>>> = HashMap::new();
        let mut words = 0;

        for word in set.eligible(MIN_WORD_LEN) {
            let Some(first) = word.chars().next() else {
                continue;
            };
            let inserted = buckets
                .entry(first)
                .or_default()
                .entry(word.chars().count())
                .or_default()
                .insert(word.to_string());
            if inserted {
                words += 1;
            }
        }

        if words == 0 {
            return Err(BuildError::NoEligibleWords {
                min_len: MIN_WORD_LEN,
            });
        }

        Ok(Self { buckets, words })
    }
}

impl Probe for HashBucket {
    fn probe(
        &self,
        text: &ScanText<'_>,
        start: usize,
        hit: &mut dyn FnMut(usize) -> ControlFlow<()>,
    ) {
        let Some(by_length) = self.buckets.get(&text.char_at(start)) else {
            return;
        };

        let remaining = text.len() - start;
        for (&length, words) in by_length.range(..=remaining) {
            let end = start + length;
            if words.contains(text.slice(start, end)) && hit(end).is_break() {
                return;
            }
        }
    }
}

impl Backend for HashBucket {
    fn kind(&self) -> BackendKind {
        BackendKind::HashBucket
    }

    fn word_count(&self) -> usize {
        self.words
    }
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;

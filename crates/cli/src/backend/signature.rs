// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bit-signature backend.
//!
//! Small per-character bit tables reject almost every candidate before an
//! exact set lookup is attempted:
//!
//! - `offsets[c]` bit `i` (0-6) is set when `c` occurs at offset `i` in some
//!   word; bit 7 covers every offset of 7 or more.
//! - `lengths[c]` bit `n - 2` (capped at 7) is set when some word of length
//!   `n` starts with `c`.
//! - `ends` holds the last character of every word of two or more chars.
//!
//! Unlike the other exact backends, single-character words are accepted and
//! tracked in their own table.

use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;

use super::{Backend, BackendKind};
use crate::error::BuildError;
use crate::scan::{Probe, ScanText};
use crate::words::WordSet;

/// Offsets and lengths at or beyond this share the top bit.
const WIDE_BIT: usize = 7;

fn bit(position: usize) -> u8 {
    1 << position.min(WIDE_BIT)
}

#[derive(Debug)]
pub struct BitSignature {
    offsets: HashMap<char, u8>,
    lengths: HashMap<char, u8>,
    singles: HashSet<char>,
    ends: HashSet<char>,
    words: HashSet<String>,
    max_len: usize,
}

impl BitSignature {
    pub fn build(set: &WordSet) -> Result<Self, BuildError> {
        let mut sig = Self {
            offsets: HashMap::new(),
            lengths: HashMap::new(),
            singles: HashSet::new(),
            ends: HashSet::new(),
            words: HashSet::new(),
            max_len: 0,
        };

        for word in set.eligible(1) {
            let chars: Vec<char> = word.chars().collect();
            for (offset, &c) in chars.iter().enumerate() {
                *sig.offsets.entry(c).or_default() |= bit(offset);
            }
            sig.max_len = sig.max_len.max(chars.len());

            match chars.as_slice() {
                [single] => {
                    sig.singles.insert(*single);
                }
                [first, .., last] => {
                    sig.ends.insert(*last);
                    *sig.lengths.entry(*first).or_default() |= bit(chars.len() - 2);
                    sig.words.insert(word.to_string());
                }
                [] => {}
            }
        }

        if sig.singles.is_empty() && sig.words.is_empty() {
            return Err(BuildError::NoEligibleWords { min_len: 1 });
        }

        Ok(sig)
    }

    fn offset_mask(&self, c: char) -> u8 {
        self.offsets.get(&c).copied().unwrap_or(0)
    }
}

impl Probe for BitSignature {
    fn probe(
        &self,
        text: &ScanText<'_>,
        start: usize,
        hit: &mut dyn FnMut(usize) -> ControlFlow<()>,
    ) {
        let begin = text.char_at(start);

        if self.singles.contains(&begin) && hit(start + 1).is_break() {
            return;
        }

        let Some(&length_mask) = self.lengths.get(&begin) else {
            return;
        };

        let reach = (self.max_len - 1).min(text.len() - start - 1);
        for j in 1..=reach {
            let current = text.char_at(start + j);
            if self.offset_mask(current) & bit(j) == 0 {
                return;
            }

            if length_mask & bit(j - 1) != 0 && self.ends.contains(&current) {
                let end = start + j + 1;
                if self.words.contains(text.slice(start, end)) && hit(end).is_break() {
                    return;
                }
            }
        }
    }
}

impl Backend for BitSignature {
    fn kind(&self) -> BackendKind {
        BackendKind::BitSignature
    }

    fn word_count(&self) -> usize {
        self.singles.len() + self.words.len()
    }
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;

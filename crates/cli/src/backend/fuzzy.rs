// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Approximate (simhash) backend.
//!
//! Every word gets a 64-bit simhash built from FNV-1a hashes of its
//! character bigrams. The fingerprint is cut into four 16-bit chunks and the
//! word is indexed under each `(chunk position, chunk value)` pair, bucketed
//! by first character. Two fingerprints within [`MAX_DISTANCE`] bits of each
//! other must agree on at least one whole chunk, so a chunk lookup finds
//! every near neighbour.
//!
//! A candidate matches when it shares the first character and the length of
//! an indexed word, its fingerprint lies within [`MAX_DISTANCE`] of that
//! word's, and the two differ in at most [`MAX_SUBSTITUTIONS`] character
//! positions. Listed words always match themselves. A report is never more
//! than one substituted character away from a listed word, but not every
//! such variant is caught: on six-character tokens one substitution away
//! from a listed word, about 60% are reported.

use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;

use super::{Backend, BackendKind, MIN_WORD_LEN};
use crate::error::BuildError;
use crate::scan::{Probe, ScanText};
use crate::words::WordSet;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Fingerprint is split into this many chunks.
pub const CHUNKS: usize = 4;
const CHUNK_BITS: usize = 64 / CHUNKS;

/// Largest Hamming distance still treated as the same word.
pub const MAX_DISTANCE: u32 = 3;

/// Most character positions a reported candidate may differ in.
pub const MAX_SUBSTITUTIONS: usize = 1;

/// FNV-1a over the characters of `feature`.
pub fn fnv1a(feature: &[char]) -> u64 {
    feature.iter().fold(FNV_OFFSET_BASIS, |hash, &c| {
        (hash ^ u64::from(c)).wrapping_mul(FNV_PRIME)
    })
}

/// Per-bit vote tally for building a simhash incrementally.
#[derive(Clone)]
struct Votes([i32; 64]);

impl Default for Votes {
    fn default() -> Self {
        Self([0; 64])
    }
}

impl Votes {
    fn add(&mut self, hash: u64) {
        for (bit, vote) in self.0.iter_mut().enumerate() {
            if (hash >> bit) & 1 == 1 {
                *vote += 1;
            } else {
                *vote -= 1;
            }
        }
    }

    fn fingerprint(&self) -> u64 {
        self.0.iter().enumerate().fold(0u64, |acc, (bit, &vote)| {
            if vote > 0 { acc | (1 << bit) } else { acc }
        })
    }
}

/// Simhash of `chars` over its bigrams.
pub fn fingerprint(chars: &[char]) -> u64 {
    let mut votes = Votes::default();
    if chars.len() < 2 {
        votes.add(fnv1a(chars));
    }
    for bigram in chars.windows(2) {
        votes.add(fnv1a(bigram));
    }
    votes.fingerprint()
}

fn chunk(fingerprint: u64, position: usize) -> u16 {
    (fingerprint >> (position * CHUNK_BITS)) as u16
}

pub fn hamming(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

/// Positions where two equal-length words differ.
fn substitutions(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

#[derive(Debug)]
struct Entry {
    chars: Vec<char>,
    fingerprint: u64,
}

type ChunkKey = (u8, u16);

#[derive(Debug)]
pub struct FuzzyHash {
    entries: Vec<Entry>,
    buckets: HashMap<char, HashMap<ChunkKey, Vec<u32>>>,
    min_len: usize,
    max_len: usize,
}

impl FuzzyHash {
    pub fn build(set: &WordSet) -> Result<Self, BuildError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        let mut buckets: HashMap<char, HashMap<ChunkKey, Vec<u32>>> = HashMap::new();
        let mut min_len = usize::MAX;
        let mut max_len = 0;

        for word in set.eligible(MIN_WORD_LEN) {
            if !seen.insert(word) {
                continue;
            }
            let chars: Vec<char> = word.chars().collect();
            let print = fingerprint(&chars);
            let id = entries.len() as u32;

            let by_chunk = buckets.entry(chars[0]).or_default();
            for position in 0..CHUNKS {
                by_chunk
                    .entry((position as u8, chunk(print, position)))
                    .or_default()
                    .push(id);
            }

            min_len = min_len.min(chars.len());
            max_len = max_len.max(chars.len());
            entries.push(Entry {
                chars,
                fingerprint: print,
            });
        }

        if entries.is_empty() {
            return Err(BuildError::NoEligibleWords {
                min_len: MIN_WORD_LEN,
            });
        }

        Ok(Self {
            entries,
            buckets,
            min_len,
            max_len,
        })
    }

    /// True when some indexed word is near `candidate`, whose fingerprint is
    /// `print`.
    fn is_near(
        &self,
        by_chunk: &HashMap<ChunkKey, Vec<u32>>,
        candidate: &[char],
        print: u64,
    ) -> bool {
        (0..CHUNKS).any(|position| {
            by_chunk
                .get(&(position as u8, chunk(print, position)))
                .is_some_and(|ids| {
                    ids.iter().any(|&id| {
                        let entry = &self.entries[id as usize];
                        entry.chars.len() == candidate.len()
                            && hamming(entry.fingerprint, print) <= MAX_DISTANCE
                            && substitutions(&entry.chars, candidate) <= MAX_SUBSTITUTIONS
                    })
                })
        })
    }
}

impl Probe for FuzzyHash {
    fn probe(
        &self,
        text: &ScanText<'_>,
        start: usize,
        hit: &mut dyn FnMut(usize) -> ControlFlow<()>,
    ) {
        let Some(by_chunk) = self.buckets.get(&text.char_at(start)) else {
            return;
        };

        let chars = text.chars();
        let limit = text.len().min(start + self.max_len);
        let mut votes = Votes::default();
        for end in start + 2..=limit {
            votes.add(fnv1a(&chars[end - 2..end]));
            let len = end - start;
            if len < self.min_len {
                continue;
            }
            if self.is_near(by_chunk, &chars[start..end], votes.fingerprint())
                && hit(end).is_break()
            {
                return;
            }
        }
    }
}

impl Backend for FuzzyHash {
    fn kind(&self) -> BackendKind {
        BackendKind::FuzzyHash
    }

    fn word_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[path = "fuzzy_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan cursor shared by every backend.
//!
//! A backend only knows how to examine candidates from one start position
//! (a [`Probe`]). The traversal rules of the two match modes, the cursor
//! advance and early exit live here, once.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

/// Traversal mode for a scan.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Try every start position and report every word found from it.
    #[default]
    Thorough,
    /// Stop at the first word from a start position and skip past it.
    #[serde(alias = "greedy-skip")]
    #[value(alias = "greedy-skip")]
    Greedy,
}

impl MatchMode {
    /// Maps the legacy `partMatch` flag onto a mode.
    pub fn from_part_match(part_match: bool) -> Self {
        if part_match {
            MatchMode::Greedy
        } else {
            MatchMode::Thorough
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Thorough => f.write_str("thorough"),
            MatchMode::Greedy => f.write_str("greedy"),
        }
    }
}

/// Text indexed by character, with byte offsets for zero-copy slicing.
pub struct ScanText<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of each char, plus a trailing `text.len()`.
    offsets: Vec<usize>,
}

impl<'a> ScanText<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len() + 1);
        for (offset, c) in text.char_indices() {
            chars.push(c);
            offsets.push(offset);
        }
        offsets.push(text.len());
        Self {
            text,
            chars,
            offsets,
        }
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Substring covering chars `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[self.offsets[start]..self.offsets[end]]
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

/// Candidate examination from a single start position.
pub trait Probe {
    /// Report the end (exclusive char index) of every word recognized when
    /// extending from `start`, shortest first. Stop extending as soon as
    /// `hit` breaks.
    fn probe(
        &self,
        text: &ScanText<'_>,
        start: usize,
        hit: &mut dyn FnMut(usize) -> ControlFlow<()>,
    );
}

/// Walk `text` left to right applying `mode`'s cursor rules.
///
/// `on_match` receives each recognized word; breaking from it stops the
/// whole scan and is propagated to the caller.
pub fn drive<P: Probe + ?Sized>(
    probe: &P,
    text: &ScanText<'_>,
    mode: MatchMode,
    on_match: &mut dyn FnMut(&str) -> ControlFlow<()>,
) -> ControlFlow<()> {
    let mut start = 0;
    while start < text.len() {
        let mut next = start + 1;
        let mut stopped = false;

        probe.probe(text, start, &mut |end| {
            if on_match(text.slice(start, end)).is_break() {
                stopped = true;
                return ControlFlow::Break(());
            }
            match mode {
                MatchMode::Thorough => ControlFlow::Continue(()),
                MatchMode::Greedy => {
                    next = end.max(start + 1);
                    ControlFlow::Break(())
                }
            }
        });

        if stopped {
            return ControlFlow::Break(());
        }
        start = next;
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight and mask rewriting of matched words.
//!
//! All distinct matched words are replaced in one left-to-right pass with an
//! Aho-Corasick automaton, so text produced by one replacement is never
//! examined again. Where matched words overlap at a position the
//! [`ReplacePolicy`] picks the winner.

use std::collections::BTreeSet;

use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Revision of the replacement rules implemented by [`Rewriter`].
pub const REPLACE_POLICY_VERSION: u32 = 1;

/// Default highlight markup.
pub const HIGHLIGHT_OPEN: &str = "<font color='red'>";
pub const HIGHLIGHT_CLOSE: &str = "</font>";

/// Which word wins when several matched words start at the same position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReplacePolicy {
    /// The longest word is replaced; shorter words inside it are left alone.
    #[default]
    LongestFirst,
    /// The shortest word is replaced; the rest of a longer word stays.
    ShortestFirst,
}

/// Markup wrapped around highlighted words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub open: String,
    pub close: String,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            open: HIGHLIGHT_OPEN.to_string(),
            close: HIGHLIGHT_CLOSE.to_string(),
        }
    }
}

/// Rewrites text around a set of matched words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewriter {
    pub policy: ReplacePolicy,
    pub highlight: Highlight,
}

impl Rewriter {
    pub fn new(policy: ReplacePolicy, highlight: Highlight) -> Self {
        Self { policy, highlight }
    }

    /// Wrap every occurrence of each word in highlight markup.
    pub fn highlight(&self, text: &str, words: &BTreeSet<String>) -> Result<String> {
        let Highlight { open, close } = &self.highlight;
        self.replace(text, words, |word, dst| {
            dst.push_str(open);
            dst.push_str(word);
            dst.push_str(close);
        })
    }

    /// Replace every occurrence of each word by `mask`, one per character.
    pub fn mask(&self, text: &str, words: &BTreeSet<String>, mask: char) -> Result<String> {
        self.replace(text, words, |word, dst| {
            dst.extend(std::iter::repeat_n(mask, word.chars().count()));
        })
    }

    fn replace(
        &self,
        text: &str,
        words: &BTreeSet<String>,
        render: impl Fn(&str, &mut String),
    ) -> Result<String> {
        if words.is_empty() {
            return Ok(text.to_string());
        }

        let mut patterns: Vec<&str> = words.iter().map(String::as_str).collect();
        let kind = match self.policy {
            ReplacePolicy::LongestFirst => MatchKind::LeftmostLongest,
            ReplacePolicy::ShortestFirst => {
                // Leftmost-first prefers earlier patterns at a position.
                patterns.sort_by_key(|p| (p.chars().count(), *p));
                MatchKind::LeftmostFirst
            }
        };
        let automaton = AhoCorasick::builder().match_kind(kind).build(&patterns)?;

        let mut out = String::with_capacity(text.len());
        automaton.replace_all_with(text, &mut out, |_, matched, dst| {
            render(matched, dst);
            true
        });
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

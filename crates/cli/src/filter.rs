// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A single compiled (backend, category) filter.
//!
//! The four text operations are derived here once from the backend's raw
//! scan, so every backend answers them the same way.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;

use crate::backend::{self, Backend, BackendKind};
use crate::error::{Error, Result};
use crate::scan::{MatchMode, ScanText};
use crate::text::Rewriter;
use crate::words::WordSet;

/// One word set compiled by one backend.
pub struct Filter {
    name: String,
    words: Arc<WordSet>,
    backend: Box<dyn Backend>,
}

impl Filter {
    /// Compile `words` with the backend registered for `kind`.
    ///
    /// A backend that rejects the set yields [`Error::Construction`]; no
    /// partially built filter is ever returned.
    pub fn new(kind: BackendKind, words: impl Into<Arc<WordSet>>) -> Result<Self> {
        let words = words.into();
        let backend = backend::build(kind, &words).map_err(|source| Error::Construction {
            kind,
            category: words.category().to_string(),
            source,
        })?;

        let name = filter_name(kind, words.category());
        tracing::debug!(
            "built filter {} with {} of {} words",
            name,
            backend.word_count(),
            words.len()
        );
        Ok(Self {
            name,
            words,
            backend,
        })
    }

    /// Lookup key within a context, rendered `kind|category`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn category(&self) -> &str {
        self.words.category()
    }

    pub fn word_set(&self) -> &Arc<WordSet> {
        &self.words
    }

    /// Words the backend kept after trimming and length policy.
    pub fn word_count(&self) -> usize {
        self.backend.word_count()
    }

    /// True if any word occurs in `text`. Stops at the first match.
    pub fn contains(&self, mode: MatchMode, text: &str) -> Result<bool> {
        let text = checked(text)?;
        let mut found = false;
        let _ = self.backend.scan(&text, mode, &mut |_| {
            found = true;
            ControlFlow::Break(())
        });
        Ok(found)
    }

    /// Every distinct word reported by a full scan of `text`.
    pub fn match_words(&self, mode: MatchMode, text: &str) -> Result<BTreeSet<String>> {
        Ok(self.collect(mode, &checked(text)?))
    }

    /// Wrap matched words in the default highlight markup.
    pub fn highlight(&self, mode: MatchMode, text: &str) -> Result<String> {
        self.highlight_using(&Rewriter::default(), mode, text)
    }

    /// Replace matched words by `mask`, one per character.
    pub fn filter(&self, mode: MatchMode, text: &str, mask: char) -> Result<String> {
        self.filter_using(&Rewriter::default(), mode, text, mask)
    }

    pub fn highlight_using(
        &self,
        rewriter: &Rewriter,
        mode: MatchMode,
        text: &str,
    ) -> Result<String> {
        validate(text)?;
        self.highlight_unchecked(rewriter, mode, text)
    }

    pub fn filter_using(
        &self,
        rewriter: &Rewriter,
        mode: MatchMode,
        text: &str,
        mask: char,
    ) -> Result<String> {
        validate(text)?;
        self.mask_unchecked(rewriter, mode, text, mask)
    }

    /// Highlight without rejecting blank text. Used for intermediate steps
    /// of a context fold, whose input was validated once up front.
    pub(crate) fn highlight_unchecked(
        &self,
        rewriter: &Rewriter,
        mode: MatchMode,
        text: &str,
    ) -> Result<String> {
        let words = self.collect(mode, &ScanText::new(text));
        rewriter.highlight(text, &words)
    }

    /// Mask without rejecting blank text.
    pub(crate) fn mask_unchecked(
        &self,
        rewriter: &Rewriter,
        mode: MatchMode,
        text: &str,
        mask: char,
    ) -> Result<String> {
        let words = self.collect(mode, &ScanText::new(text));
        rewriter.mask(text, &words, mask)
    }

    fn collect(&self, mode: MatchMode, text: &ScanText<'_>) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        let _ = self.backend.scan(text, mode, &mut |word| {
            if !found.contains(word) {
                found.insert(word.to_string());
            }
            ControlFlow::Continue(())
        });
        tracing::trace!("{} matched {} distinct words", self.name, found.len());
        found
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("name", &self.name)
            .field("words", &self.words.len())
            .field("backend", &self.backend)
            .finish()
    }
}

/// Name of the filter for `category` under `kind`.
pub fn filter_name(kind: BackendKind, category: &str) -> String {
    format!("{kind}|{category}")
}

/// Rejects blank text before any scanning.
pub(crate) fn validate(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::BlankText);
    }
    Ok(())
}

fn checked(text: &str) -> Result<ScanText<'_>> {
    validate(text)?;
    Ok(ScanText::new(text))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-backend aggregation of filters across categories.
//!
//! A [`FilterContext`] keeps one [`Filter`] per category in a concurrent map.
//! The filter owns its word set, so a category's source words and compiled
//! state are always replaced together. Multi-category operations snapshot
//! the current filters, order them by name and fold over the snapshot.
//!
//! Every operation has a `*_with` form taking an interceptor called after
//! each filter with `(filter name, category, step result)`. Returning
//! `false` stops the fold and returns what has been folded so far.

use std::collections::BTreeSet;
use std::sync::Arc;

use dashmap::DashMap;
use rayon::prelude::*;

use crate::backend::BackendKind;
use crate::error::Result;
use crate::filter::{Filter, validate};
use crate::scan::MatchMode;
use crate::text::Rewriter;
use crate::words::WordSet;

/// Filters of one backend kind, keyed by category.
#[derive(Debug)]
pub struct FilterContext {
    kind: BackendKind,
    filters: DashMap<String, Arc<Filter>>,
    rewriter: Rewriter,
}

impl FilterContext {
    /// Empty context for `kind`.
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            filters: DashMap::new(),
            rewriter: Rewriter::default(),
        }
    }

    /// Compile every word set in parallel into a new context.
    ///
    /// The first construction error aborts the build. When two sets share a
    /// category the later one wins.
    pub fn build<I>(kind: BackendKind, word_sets: I) -> Result<Self>
    where
        I: IntoIterator<Item = WordSet>,
    {
        let word_sets: Vec<WordSet> = word_sets.into_iter().collect();
        let filters = word_sets
            .into_par_iter()
            .map(|words| Filter::new(kind, words))
            .collect::<Result<Vec<_>>>()?;

        let context = Self::new(kind);
        for filter in filters {
            context
                .filters
                .insert(filter.category().to_string(), Arc::new(filter));
        }
        tracing::debug!("built {} context with {} filters", kind, context.len());
        Ok(context)
    }

    /// Replace the rewriter used by `highlight` and `filter`.
    pub fn with_rewriter(mut self, rewriter: Rewriter) -> Self {
        self.rewriter = rewriter;
        self
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    pub fn rewriter(&self) -> &Rewriter {
        &self.rewriter
    }

    /// Build a filter for the set's category and swap it in.
    ///
    /// On construction error the existing filter for the category, if any,
    /// is left in place.
    pub fn create_or_update(&self, words: WordSet) -> Result<()> {
        let filter = Filter::new(self.kind, words)?;
        let category = filter.category().to_string();
        if self.filters.insert(category, Arc::new(filter)).is_some() {
            tracing::debug!("replaced filter in {} context", self.kind);
        }
        Ok(())
    }

    /// Drop the filter for `category`, returning it if one existed.
    pub fn remove(&self, category: &str) -> Option<Arc<Filter>> {
        self.filters.remove(category).map(|(_, filter)| filter)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.filters.contains_key(category)
    }

    /// Category names in filter order.
    pub fn category_names(&self) -> Vec<String> {
        self.snapshot()
            .iter()
            .map(|f| f.category().to_string())
            .collect()
    }

    /// Filter names in fold order.
    pub fn filter_names(&self) -> Vec<String> {
        self.snapshot().iter().map(|f| f.name().to_string()).collect()
    }

    pub fn word_set(&self, category: &str) -> Option<Arc<WordSet>> {
        self.get_filter(category).map(|f| Arc::clone(f.word_set()))
    }

    pub fn get_filter(&self, category: &str) -> Option<Arc<Filter>> {
        self.filters.get(category).map(|entry| Arc::clone(entry.value()))
    }

    /// True if any category's filter finds a word. Stops at the first hit.
    pub fn contains(&self, mode: MatchMode, text: &str) -> Result<bool> {
        self.contains_with(mode, text, |_, _, found| !*found)
    }

    pub fn contains_with<F>(&self, mode: MatchMode, text: &str, mut intercept: F) -> Result<bool>
    where
        F: FnMut(&str, &str, &bool) -> bool,
    {
        validate(text)?;
        let mut any = false;
        for filter in self.snapshot() {
            let found = filter.contains(mode, text)?;
            any |= found;
            if !intercept(filter.name(), filter.category(), &found) {
                break;
            }
        }
        Ok(any)
    }

    /// Union of every category's matched words.
    pub fn match_words(&self, mode: MatchMode, text: &str) -> Result<BTreeSet<String>> {
        self.match_words_with(mode, text, |_, _, _| true)
    }

    pub fn match_words_with<F>(
        &self,
        mode: MatchMode,
        text: &str,
        mut intercept: F,
    ) -> Result<BTreeSet<String>>
    where
        F: FnMut(&str, &str, &BTreeSet<String>) -> bool,
    {
        validate(text)?;
        let mut all = BTreeSet::new();
        for filter in self.snapshot() {
            let found = filter.match_words(mode, text)?;
            all.extend(found.iter().cloned());
            if !intercept(filter.name(), filter.category(), &found) {
                break;
            }
        }
        Ok(all)
    }

    /// Highlight with each category's filter in turn.
    pub fn highlight(&self, mode: MatchMode, text: &str) -> Result<String> {
        self.highlight_with(mode, text, |_, _, _| true)
    }

    pub fn highlight_with<F>(&self, mode: MatchMode, text: &str, intercept: F) -> Result<String>
    where
        F: FnMut(&str, &str, &str) -> bool,
    {
        self.compose(text, intercept, |filter, folded| {
            filter.highlight_unchecked(&self.rewriter, mode, folded)
        })
    }

    /// Mask with each category's filter in turn.
    pub fn filter(&self, mode: MatchMode, text: &str, mask: char) -> Result<String> {
        self.filter_with(mode, text, mask, |_, _, _| true)
    }

    pub fn filter_with<F>(
        &self,
        mode: MatchMode,
        text: &str,
        mask: char,
        intercept: F,
    ) -> Result<String>
    where
        F: FnMut(&str, &str, &str) -> bool,
    {
        self.compose(text, intercept, |filter, folded| {
            filter.mask_unchecked(&self.rewriter, mode, folded, mask)
        })
    }

    /// Feed the text through every filter, each step seeing the last output.
    ///
    /// Only the caller's text is validated; a step may legitimately leave
    /// blank text behind, e.g. when masking with a space.
    fn compose<F, S>(&self, text: &str, mut intercept: F, step: S) -> Result<String>
    where
        F: FnMut(&str, &str, &str) -> bool,
        S: Fn(&Filter, &str) -> Result<String>,
    {
        validate(text)?;
        let mut folded = text.to_string();
        for filter in self.snapshot() {
            folded = step(filter.as_ref(), folded.as_str())?;
            if !intercept(filter.name(), filter.category(), &folded) {
                break;
            }
        }
        Ok(folded)
    }

    /// Current filters ordered by name.
    fn snapshot(&self) -> Vec<Arc<Filter>> {
        let mut filters: Vec<Arc<Filter>> = self
            .filters
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        filters.sort_by(|a, b| a.name().cmp(b.name()));
        filters
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

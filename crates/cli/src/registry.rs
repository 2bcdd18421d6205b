// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Context cache keyed by backend kind.
//!
//! Reloading swaps in a freshly built [`FilterContext`]; callers that
//! already hold the previous `Arc` keep scanning against the old filters.

use std::sync::Arc;

use dashmap::DashMap;

use crate::backend::BackendKind;
use crate::context::FilterContext;
use crate::error::{Error, Result};
use crate::text::Rewriter;
use crate::words::WordSet;

#[derive(Debug, Default)]
pub struct ContextRegistry {
    contexts: DashMap<BackendKind, Arc<FilterContext>>,
    rewriter: Rewriter,
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewriter handed to every context this registry builds.
    pub fn with_rewriter(mut self, rewriter: Rewriter) -> Self {
        self.rewriter = rewriter;
        self
    }

    /// Cached context for `kind`, building it from `word_sets` if absent.
    ///
    /// When a context already exists `word_sets` is ignored.
    pub fn build<I>(&self, kind: BackendKind, word_sets: I) -> Result<Arc<FilterContext>>
    where
        I: IntoIterator<Item = WordSet>,
    {
        if let Some(context) = self.contexts.get(&kind) {
            return Ok(Arc::clone(context.value()));
        }

        let built = Arc::new(self.compile(kind, word_sets)?);
        // Another caller may have won the race; keep whichever landed first.
        let entry = self.contexts.entry(kind).or_insert(built);
        Ok(Arc::clone(entry.value()))
    }

    /// Build a new context for `kind` and replace any cached one.
    pub fn reload<I>(&self, kind: BackendKind, word_sets: I) -> Result<Arc<FilterContext>>
    where
        I: IntoIterator<Item = WordSet>,
    {
        let built = Arc::new(self.compile(kind, word_sets)?);
        self.contexts.insert(kind, Arc::clone(&built));
        tracing::info!("reloaded {} context with {} filters", kind, built.len());
        Ok(built)
    }

    /// Create or replace one category in the cached context for `kind`.
    pub fn reload_filter(&self, kind: BackendKind, words: WordSet) -> Result<()> {
        let context = self.get_context(kind)?;
        let category = words.category().to_string();
        context.create_or_update(words)?;
        tracing::info!("reloaded {} filter for category {}", kind, category);
        Ok(())
    }

    pub fn get_context(&self, kind: BackendKind) -> Result<Arc<FilterContext>> {
        self.contexts
            .get(&kind)
            .map(|context| Arc::clone(context.value()))
            .ok_or(Error::NotInitialized(kind))
    }

    /// Drop the cached context for `kind`.
    pub fn remove(&self, kind: BackendKind) -> Option<Arc<FilterContext>> {
        self.contexts.remove(&kind).map(|(_, context)| context)
    }

    /// Drop every cached context.
    pub fn clear(&self) {
        let count = self.contexts.len();
        self.contexts.clear();
        tracing::info!("cleared {} contexts", count);
    }

    /// Kinds with a cached context, in declaration order.
    pub fn kinds(&self) -> Vec<BackendKind> {
        let mut kinds: Vec<BackendKind> = self.contexts.iter().map(|e| *e.key()).collect();
        kinds.sort();
        kinds
    }

    fn compile<I>(&self, kind: BackendKind, word_sets: I) -> Result<FilterContext>
    where
        I: IntoIterator<Item = WordSet>,
    {
        Ok(FilterContext::build(kind, word_sets)?.with_rewriter(self.rewriter.clone()))
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

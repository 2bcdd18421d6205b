// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for match results.

pub mod json;
pub mod text;

use std::collections::BTreeSet;

use serde::Serialize;

use crate::backend::BackendKind;
use crate::scan::MatchMode;

/// Everything `match` found, overall and per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutput {
    pub backend: BackendKind,
    pub mode: MatchMode,
    /// Union of every category's words.
    pub words: BTreeSet<String>,
    /// Categories with at least one match, in filter order.
    pub categories: Vec<CategoryMatches>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMatches {
    pub category: String,
    pub filter: String,
    pub words: BTreeSet<String>,
}

impl MatchOutput {
    pub fn new(backend: BackendKind, mode: MatchMode) -> Self {
        Self {
            backend,
            mode,
            words: BTreeSet::new(),
            categories: Vec::new(),
        }
    }

    /// Record one filter's result; empty results are skipped.
    pub fn push(&mut self, filter: &str, category: &str, words: &BTreeSet<String>) {
        if words.is_empty() {
            return;
        }
        self.words.extend(words.iter().cloned());
        self.categories.push(CategoryMatches {
            category: category.to_string(),
            filter: filter.to_string(),
            words: words.clone(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

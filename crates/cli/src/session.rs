// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Engine setup for one command invocation.
//!
//! Command-line flags override the config file; word lists from both are
//! combined into one context.

use crate::backend::BackendKind;
use crate::cli::ScanArgs;
use crate::config::Config;
use crate::context::FilterContext;
use crate::error::{Error, Result};
use crate::loader::load_word_file;
use crate::scan::MatchMode;

#[derive(Debug)]
pub struct Session {
    context: FilterContext,
    mode: MatchMode,
    mask: char,
}

impl Session {
    pub fn open(config: &Config, args: &ScanArgs) -> Result<Self> {
        let kind = args.backend.unwrap_or(config.engine.backend);
        let mode = args.mode.unwrap_or(config.engine.mode);

        let mut word_sets = config.word_sets()?;
        for path in &args.words {
            word_sets.push(load_word_file(path, None)?);
        }
        if word_sets.is_empty() {
            return Err(Error::Argument(
                "no word lists given (use --words FILE or [[category]] in wordgate.toml)"
                    .to_string(),
            ));
        }

        tracing::debug!(
            "opening {} session over {} categories in {} mode",
            kind,
            word_sets.len(),
            mode
        );
        let context = FilterContext::build(kind, word_sets)?.with_rewriter(config.rewriter());

        Ok(Self {
            context,
            mode,
            mask: config.engine.mask,
        })
    }

    /// Override the configured mask character.
    pub fn with_mask(mut self, mask: Option<char>) -> Self {
        if let Some(mask) = mask {
            self.mask = mask;
        }
        self
    }

    pub fn kind(&self) -> BackendKind {
        self.context.kind()
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn mask(&self) -> char {
        self.mask
    }

    pub fn context(&self) -> &FilterContext {
        &self.context
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

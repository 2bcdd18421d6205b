// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod backend;
pub mod cli;
pub mod config;
pub mod context;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod registry;
pub mod scan;
pub mod session;
pub mod text;
pub mod words;

pub use backend::{Backend, BackendKind};
pub use context::FilterContext;
pub use error::{BuildError, Error, ExitCode, Result};
pub use filter::Filter;
pub use loader::load_word_file;
pub use registry::ContextRegistry;
pub use scan::MatchMode;
pub use text::{Highlight, ReplacePolicy, Rewriter};
pub use words::WordSet;

#[cfg(test)]
pub mod test_utils;

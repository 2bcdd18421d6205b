// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy shared by the engine and the CLI.

use std::path::PathBuf;

use crate::backend::BackendKind;

/// Wordgate error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Text argument is empty or whitespace only.
    #[error("validation error: text must not be blank")]
    BlankText,

    /// Word set category is empty.
    #[error("validation error: category must not be empty")]
    EmptyCategory,

    /// Word set has no words.
    #[error("validation error: word collection for '{category}' is empty")]
    EmptyWords { category: String },

    /// Backend name not present in the registry.
    #[error("unknown backend kind: {0}")]
    UnknownBackend(String),

    /// A backend refused to compile a word set.
    #[error("failed to build {kind} filter for category '{category}': {source}")]
    Construction {
        kind: BackendKind,
        category: String,
        #[source]
        source: BuildError,
    },

    /// No context was built or reloaded for this backend kind.
    #[error("filter context not initialized: {0}")]
    NotInitialized(BackendKind),

    /// Replacement automaton could not be built for the matched words.
    #[error("rewrite error: {0}")]
    Rewrite(#[from] aho_corasick::BuildError),

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True for errors raised before any building or scanning took place.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::BlankText | Error::EmptyCategory | Error::EmptyWords { .. }
        )
    }
}

/// Reason a backend rejected a word set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Every word was blank or shorter than the backend accepts.
    #[error("no word of at least {min_len} character(s) remains after trimming")]
    NoEligibleWords { min_len: usize },
}

/// Result type using wordgate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Nothing sensitive found, or command completed
    Success = 0,
    /// `check` found sensitive words
    Sensitive = 1,
    /// Configuration, argument or validation error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::BlankText | Error::EmptyCategory | Error::EmptyWords { .. } => {
                ExitCode::ConfigError
            }
            Error::UnknownBackend(_) | Error::Construction { .. } => ExitCode::ConfigError,
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::NotInitialized(_) => ExitCode::InternalError,
            Error::Rewrite(_) | Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

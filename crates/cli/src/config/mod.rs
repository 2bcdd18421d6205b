// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles wordgate.toml parsing with version validation and unknown key warnings.

mod parse;
mod suggest;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use suggest::{suggest_backend_name, unknown_backend_message};

use crate::backend::BackendKind;
use crate::error::{Error, Result};
use crate::loader::{file_category, read_words};
use crate::scan::MatchMode;
use crate::text::{Highlight, ReplacePolicy, Rewriter};
use crate::words::WordSet;
use parse::{parse_categories, parse_engine_config, parse_highlight_config, warn_unknown_key};

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "wordgate.toml";

/// Mask character when none is configured.
pub const DEFAULT_MASK: char = '*';

/// Known top-level keys.
const KNOWN_KEYS: &[&str] = &["version", "engine", "highlight", "category"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    engine: Option<toml::Value>,

    #[serde(default)]
    highlight: Option<toml::Value>,

    #[serde(default)]
    category: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Matching engine settings.
    pub engine: EngineConfig,

    /// Highlight markup.
    pub highlight: Highlight,

    /// Word list categories.
    pub categories: Vec<CategoryConfig>,

    /// Directory that category files are relative to.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            engine: EngineConfig::default(),
            highlight: Highlight::default(),
            categories: Vec::new(),
            root: PathBuf::from("."),
        }
    }
}

/// `[engine]` settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub backend: BackendKind,
    pub mode: MatchMode,
    pub mask: char,
    pub policy: ReplacePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Automaton,
            mode: MatchMode::default(),
            mask: DEFAULT_MASK,
            policy: ReplacePolicy::default(),
        }
    }
}

/// One `[[category]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Category name; optional when exactly one file is listed.
    pub name: Option<String>,
    pub files: Vec<PathBuf>,
    pub words: Vec<String>,
}

impl Config {
    /// Rewriter built from the replace policy and highlight markup.
    pub fn rewriter(&self) -> Rewriter {
        Rewriter::new(self.engine.policy, self.highlight.clone())
    }

    /// Load every configured category into a word set.
    ///
    /// Inline words and words read from the category's files are merged.
    pub fn word_sets(&self) -> Result<Vec<WordSet>> {
        self.categories
            .iter()
            .enumerate()
            .map(|(index, category)| self.load_category(index, category))
            .collect()
    }

    fn load_category(&self, index: usize, category: &CategoryConfig) -> Result<WordSet> {
        let name = match (&category.name, category.files.as_slice()) {
            (Some(name), _) => name.clone(),
            (None, [file]) => file_category(file)?,
            (None, _) => {
                return Err(Error::Config {
                    message: format!(
                        "category #{} needs a name unless it lists exactly one file",
                        index + 1
                    ),
                    path: None,
                });
            }
        };

        let mut words = category.words.clone();
        for file in &category.files {
            words.extend(read_words(&self.root.join(file))?);
        }
        WordSet::new(name, words)
    }
}

/// Load config from file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade wordgate to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let root = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(Config {
        version,
        engine: parse_engine_config(flexible.engine.as_ref(), path)?,
        highlight: parse_highlight_config(flexible.highlight.as_ref(), path)?,
        categories: parse_categories(flexible.category.as_ref(), path)?,
        root,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

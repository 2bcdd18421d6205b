// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Section parsers for wordgate.toml.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::suggest::unknown_backend_message;
use super::{CategoryConfig, EngineConfig};
use crate::backend::BackendKind;
use crate::error::{Error, Result};
use crate::text::Highlight;

const KNOWN_ENGINE_KEYS: &[&str] = &["backend", "mode", "mask", "policy"];
const KNOWN_HIGHLIGHT_KEYS: &[&str] = &["open", "close"];
const KNOWN_CATEGORY_KEYS: &[&str] = &["name", "files", "words"];

/// Warn about an unrecognized config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "wordgate: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

fn invalid(path: &Path, message: String) -> Error {
    Error::Config {
        message,
        path: Some(path.to_path_buf()),
    }
}

/// Parse an optional TOML array of strings, returning empty vec if not found.
fn parse_string_array(value: Option<&toml::Value>, key: &str, path: &Path) -> Result<Vec<String>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let items = value
        .as_array()
        .ok_or_else(|| invalid(path, format!("{key} must be an array of strings")))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(String::from)
                .ok_or_else(|| invalid(path, format!("{key} must be an array of strings")))
        })
        .collect()
}

fn parse_string(value: &toml::Value, key: &str, path: &Path) -> Result<String> {
    value
        .as_str()
        .map(String::from)
        .ok_or_else(|| invalid(path, format!("{key} must be a string")))
}

/// Deserialize a value enum such as the match mode or replace policy.
fn parse_enum<T: DeserializeOwned>(value: &toml::Value, key: &str, path: &Path) -> Result<T> {
    value
        .clone()
        .try_into::<T>()
        .map_err(|e| invalid(path, format!("{key}: {e}")))
}

fn parse_mask(value: &toml::Value, path: &Path) -> Result<char> {
    let text = parse_string(value, "engine.mask", path)?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(mask), None) => Ok(mask),
        _ => Err(invalid(
            path,
            format!("engine.mask must be a single character, got {text:?}"),
        )),
    }
}

/// Parse the `[engine]` table.
pub(super) fn parse_engine_config(
    value: Option<&toml::Value>,
    path: &Path,
) -> Result<EngineConfig> {
    let mut engine = EngineConfig::default();
    let Some(value) = value else {
        return Ok(engine);
    };
    let Some(t) = value.as_table() else {
        return Err(invalid(path, "engine must be a table".to_string()));
    };

    if let Some(v) = t.get("backend") {
        let name = parse_string(v, "engine.backend", path)?;
        engine.backend = name
            .parse::<BackendKind>()
            .map_err(|_| invalid(path, unknown_backend_message(&name)))?;
    }
    if let Some(v) = t.get("mode") {
        engine.mode = parse_enum(v, "engine.mode", path)?;
    }
    if let Some(v) = t.get("mask") {
        engine.mask = parse_mask(v, path)?;
    }
    if let Some(v) = t.get("policy") {
        engine.policy = parse_enum(v, "engine.policy", path)?;
    }

    for key in t.keys() {
        if !KNOWN_ENGINE_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("engine.{}", key));
        }
    }
    Ok(engine)
}

/// Parse the `[highlight]` table.
pub(super) fn parse_highlight_config(
    value: Option<&toml::Value>,
    path: &Path,
) -> Result<Highlight> {
    let mut highlight = Highlight::default();
    let Some(value) = value else {
        return Ok(highlight);
    };
    let Some(t) = value.as_table() else {
        return Err(invalid(path, "highlight must be a table".to_string()));
    };

    if let Some(v) = t.get("open") {
        highlight.open = parse_string(v, "highlight.open", path)?;
    }
    if let Some(v) = t.get("close") {
        highlight.close = parse_string(v, "highlight.close", path)?;
    }

    for key in t.keys() {
        if !KNOWN_HIGHLIGHT_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("highlight.{}", key));
        }
    }
    Ok(highlight)
}

/// Parse the `[[category]]` array.
pub(super) fn parse_categories(
    value: Option<&toml::Value>,
    path: &Path,
) -> Result<Vec<CategoryConfig>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let Some(items) = value.as_array() else {
        return Err(invalid(path, "category must be an array of tables".to_string()));
    };

    let mut categories = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Some(t) = item.as_table() else {
            return Err(invalid(path, format!("category #{} must be a table", index + 1)));
        };

        let name = t
            .get("name")
            .map(|v| parse_string(v, "category.name", path))
            .transpose()?;
        let files = parse_string_array(t.get("files"), "category.files", path)?
            .into_iter()
            .map(PathBuf::from)
            .collect();
        let words = parse_string_array(t.get("words"), "category.words", path)?;

        for key in t.keys() {
            if !KNOWN_CATEGORY_KEYS.contains(&key.as_str()) {
                warn_unknown_key(path, &format!("category.{}", key));
            }
        }

        categories.push(CategoryConfig { name, files, words });
    }
    Ok(categories)
}

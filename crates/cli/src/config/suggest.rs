// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backend name suggestions for config validation.

use crate::backend::REGISTRY;

/// Suggest a canonical backend name for a typo.
pub fn suggest_backend_name(unknown: &str) -> Option<&'static str> {
    let unknown = unknown.trim().to_ascii_lowercase();
    if unknown.is_empty() {
        return None;
    }

    // Common spellings that are neither names nor aliases
    let suggestion = match unknown.as_str() {
        "tree" | "aho" | "aho-corasick" | "ac" => Some("automaton"),
        "hash" | "hashbucket" | "buckets" => Some("hash-bucket"),
        "char" | "chars" | "char-set" | "double-array" => Some("charset"),
        "bits" | "bitset" | "bitmap" => Some("bit-signature"),
        "lsh" | "approx" | "approximate" => Some("fuzzy-hash"),
        _ => None,
    };

    if suggestion.is_some() {
        return suggestion;
    }

    // Try prefix matching (require at least 2 chars to avoid false positives)
    if unknown.len() >= 2 {
        for registration in &REGISTRY {
            let names =
                std::iter::once(registration.name).chain(registration.aliases.iter().copied());
            for name in names {
                if name.starts_with(&unknown) || unknown.starts_with(name) {
                    return Some(registration.name);
                }
            }
        }
    }

    None
}

/// Message for an unrecognized backend name.
pub fn unknown_backend_message(unknown: &str) -> String {
    match suggest_backend_name(unknown) {
        Some(suggested) => {
            format!("unknown backend `{unknown}`. Did you mean `{suggested}`?")
        }
        None => {
            let valid: Vec<&str> = REGISTRY.iter().map(|r| r.name).collect();
            format!(
                "unknown backend `{unknown}`\n  Valid backends: {}",
                valid.join(", ")
            )
        }
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;

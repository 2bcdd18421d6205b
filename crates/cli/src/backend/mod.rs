// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matching backends and the registry that builds them.
//!
//! Each backend compiles a [`WordSet`] once into immutable state and then
//! answers [`Probe`] queries; the cursor rules of both match modes are
//! applied on top by [`crate::scan::drive`].

pub mod automaton;
pub mod bucket;
pub mod charset;
pub mod fuzzy;
pub mod signature;

use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;

use crate::error::{BuildError, Error};
use crate::scan::{MatchMode, Probe, ScanText, drive};
use crate::words::WordSet;

/// Shortest word the tree, bucket, charset and fuzzy backends accept.
pub(crate) const MIN_WORD_LEN: usize = 2;

/// Tag naming one backend in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BackendKind {
    /// Character tree walk (also known as DFA / trie).
    Automaton,
    /// Words grouped by first character and length.
    HashBucket,
    /// Character-set pruned substring lookup.
    CharsetScan,
    /// Per-character bit tables with exact verification.
    BitSignature,
    /// Simhash fingerprint buckets with approximate membership.
    FuzzyHash,
}

impl BackendKind {
    pub const ALL: [BackendKind; 5] = [
        BackendKind::Automaton,
        BackendKind::HashBucket,
        BackendKind::CharsetScan,
        BackendKind::BitSignature,
        BackendKind::FuzzyHash,
    ];

    /// Canonical name used in config files, filter names and logs.
    pub fn as_str(self) -> &'static str {
        self.registration().name
    }

    pub fn description(self) -> &'static str {
        self.registration().description
    }

    fn registration(self) -> &'static Registration {
        // The registry lists every kind exactly once, in declaration order.
        &REGISTRY[self as usize]
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for BackendKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = Error;

    /// Accepts canonical names and legacy aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        REGISTRY
            .iter()
            .find(|r| r.name == needle || r.aliases.contains(&needle.as_str()))
            .map(|r| r.kind)
            .ok_or_else(|| Error::UnknownBackend(s.to_string()))
    }
}

/// Compiled, immutable matching state for one word set.
pub trait Backend: Probe + Send + Sync + fmt::Debug {
    fn kind(&self) -> BackendKind;

    /// Number of words retained after trimming and length policy.
    fn word_count(&self) -> usize;

    /// Scan `text` under `mode`, handing each recognized word to `on_match`.
    ///
    /// Returns `Break` when `on_match` asked to stop.
    fn scan(
        &self,
        text: &ScanText<'_>,
        mode: MatchMode,
        on_match: &mut dyn FnMut(&str) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        drive(self, text, mode, on_match)
    }
}

type BuildFn = fn(&WordSet) -> Result<Box<dyn Backend>, BuildError>;

/// One registry row: a backend kind, its names and its build function.
pub struct Registration {
    pub kind: BackendKind,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    build: BuildFn,
}

/// Every available backend, indexed by `BackendKind as usize`.
pub static REGISTRY: [Registration; 5] = [
    Registration {
        kind: BackendKind::Automaton,
        name: "automaton",
        aliases: &["dfa", "trie", "tire"],
        description: "character tree walk",
        build: |words| boxed(automaton::Automaton::build(words)),
    },
    Registration {
        kind: BackendKind::HashBucket,
        name: "hash-bucket",
        aliases: &["hash_bucket", "bucket"],
        description: "first-character and length buckets",
        build: |words| boxed(bucket::HashBucket::build(words)),
    },
    Registration {
        kind: BackendKind::CharsetScan,
        name: "charset",
        aliases: &["charset-scan", "dat"],
        description: "character-set pruned lookup",
        build: |words| boxed(charset::CharsetScan::build(words)),
    },
    Registration {
        kind: BackendKind::BitSignature,
        name: "bit-signature",
        aliases: &["signature", "ttmp"],
        description: "bit-table prefilter with exact verification",
        build: |words| boxed(signature::BitSignature::build(words)),
    },
    Registration {
        kind: BackendKind::FuzzyHash,
        name: "fuzzy-hash",
        aliases: &["fuzzy", "simhash"],
        description: "simhash fingerprint buckets",
        build: |words| boxed(fuzzy::FuzzyHash::build(words)),
    },
];

fn boxed<B: Backend + 'static>(
    built: Result<B, BuildError>,
) -> Result<Box<dyn Backend>, BuildError> {
    built.map(|backend| Box::new(backend) as Box<dyn Backend>)
}

/// Compile `words` with the backend registered for `kind`.
pub fn build(kind: BackendKind, words: &WordSet) -> Result<Box<dyn Backend>, BuildError> {
    (kind.registration().build)(words)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

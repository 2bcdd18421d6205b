// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character tree (trie/DFA) backend.
//!
//! Nodes live in a flat arena and refer to children by index, so the
//! compiled tree is plain data with no ownership chains.

use std::collections::HashMap;
use std::ops::ControlFlow;

use super::{Backend, BackendKind, MIN_WORD_LEN};
use crate::error::BuildError;
use crate::scan::{Probe, ScanText};
use crate::words::WordSet;

const ROOT: usize = 0;

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, u32>,
    /// A word ends at this node.
    terminal: bool,
}

/// Compiled character tree.
#[derive(Debug)]
pub struct Automaton {
    nodes: Vec<Node>,
    words: usize,
}

impl Automaton {
    pub fn build(set: &WordSet) -> Result<Self, BuildError> {
        let mut nodes = vec![Node::default()];
        let mut words = 0;

        for word in set.eligible(MIN_WORD_LEN) {
            let mut current = ROOT;
            for c in word.chars() {
                current = match nodes[current].children.get(&c) {
                    Some(&next) => next as usize,
                    None => {
                        let next = nodes.len();
                        nodes.push(Node::default());
                        nodes[current].children.insert(c, next as u32);
                        next
                    }
                };
            }
            if !nodes[current].terminal {
                nodes[current].terminal = true;
                words += 1;
            }
        }

        if words == 0 {
            return Err(BuildError::NoEligibleWords {
                min_len: MIN_WORD_LEN,
            });
        }

        Ok(Self { nodes, words })
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn child(&self, node: usize, c: char) -> Option<usize> {
        self.nodes[node].children.get(&c).map(|&next| next as usize)
    }
}

impl Probe for Automaton {
    fn probe(
        &self,
        text: &ScanText<'_>,
        start: usize,
        hit: &mut dyn FnMut(usize) -> ControlFlow<()>,
    ) {
        let mut node = ROOT;
        for (offset, &c) in text.chars()[start..].iter().enumerate() {
            let Some(next) = self.child(node, c) else {
                return;
            };
            node = next;

            if self.nodes[node].terminal && hit(start + offset + 1).is_break() {
                return;
            }
            if self.nodes[node].children.is_empty() {
                return;
            }
        }
    }
}

impl Backend for Automaton {
    fn kind(&self) -> BackendKind {
        BackendKind::Automaton
    }

    fn word_count(&self) -> usize {
        self.words
    }
}

#[cfg(test)]
#[path = "automaton_tests.rs"]
mod tests;

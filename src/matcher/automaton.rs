// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-pattern automaton (Aho-Corasick).
//!
//! A trie over every pattern, plus a failure link per node pointing at the deepest
//! proper suffix of that node's path which is itself a trie node. Failure links are
//! filled breadth-first, so when a node is processed every shallower node is done
//! and its output set can simply be appended to the node's own.
//!
//! That merged output set is what lets `"he"` report inside `"she"`. The scan is a
//! single left-to-right pass: follow a trie edge if there is one, otherwise walk the
//! failure chain (ending at the root), then emit the node's outputs.
//!
//! The automaton is immutable after [`Automaton::build`], so one instance can be
//! shared by every document scan in a query.

use std::collections::{HashMap, VecDeque};

use crate::error::{Result, SearchError};

use super::{validate_patterns, Offsets};

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, usize>,
    failure: usize,
    depth: usize,
    /// Pattern ids ending here, own and inherited through the failure link.
    outputs: Vec<usize>,
}

/// Trie with failure links over a fixed pattern set.
#[derive(Debug, Clone)]
pub struct Automaton {
    nodes: Vec<Node>,
    pattern_lens: Vec<usize>,
}

impl Automaton {
    /// Build the automaton. Empty patterns are rejected; duplicates are fine and each
    /// copy reports independently.
    pub fn build<P: AsRef<[char]>>(patterns: &[P]) -> Result<Self> {
        validate_patterns(patterns)?;

        let mut automaton = Self {
            nodes: vec![Node::default()],
            pattern_lens: Vec::with_capacity(patterns.len()),
        };

        for (id, pattern) in patterns.iter().enumerate() {
            automaton.insert(id, pattern.as_ref());
        }
        automaton.link_failures();
        automaton.verify()?;

        Ok(automaton)
    }

    fn insert(&mut self, id: usize, pattern: &[char]) {
        let mut current = ROOT;
        for (depth, &c) in pattern.iter().enumerate() {
            current = match self.nodes[current].children.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node {
                        depth: depth + 1,
                        ..Node::default()
                    });
                    self.nodes[current].children.insert(c, next);
                    next
                }
            };
        }
        self.nodes[current].outputs.push(id);
        self.pattern_lens.push(pattern.len());
    }

    fn link_failures(&mut self) {
        let mut queue: VecDeque<usize> = VecDeque::new();

        // Depth-1 nodes fail to the root.
        let first_level: Vec<usize> = self.nodes[ROOT].children.values().copied().collect();
        for child in first_level {
            self.nodes[child].failure = ROOT;
            queue.push_back(child);
        }

        while let Some(node) = queue.pop_front() {
            let edges: Vec<(char, usize)> = self.nodes[node]
                .children
                .iter()
                .map(|(&c, &child)| (c, child))
                .collect();

            for (c, child) in edges {
                queue.push_back(child);

                let mut fallback = self.nodes[node].failure;
                let failure = loop {
                    if let Some(&target) = self.nodes[fallback].children.get(&c) {
                        break target;
                    }
                    if fallback == ROOT {
                        break ROOT;
                    }
                    fallback = self.nodes[fallback].failure;
                };
                self.nodes[child].failure = failure;

                let inherited = self.nodes[failure].outputs.clone();
                self.nodes[child].outputs.extend(inherited);
            }
        }
    }

    /// Check the structural invariants the scan relies on.
    ///
    /// The root fails to itself, every other failure link points strictly
    /// shallower, and every output ends at a node at least as deep as the pattern.
    pub fn verify(&self) -> Result<()> {
        if self.nodes[ROOT].failure != ROOT {
            return Err(SearchError::inconsistency(
                "automaton root failure link is not the root",
            ));
        }

        for (id, node) in self.nodes.iter().enumerate().skip(1) {
            let target = self.nodes.get(node.failure).ok_or_else(|| {
                SearchError::inconsistency(format!(
                    "automaton node {} fails to missing node {}",
                    id, node.failure
                ))
            })?;
            if target.depth >= node.depth {
                return Err(SearchError::inconsistency(format!(
                    "automaton node {} (depth {}) fails to node {} (depth {})",
                    id, node.depth, node.failure, target.depth
                )));
            }
            for &pattern in &node.outputs {
                let len = self.pattern_lens.get(pattern).copied().unwrap_or(usize::MAX);
                if len > node.depth {
                    return Err(SearchError::inconsistency(format!(
                        "automaton node {} (depth {}) outputs pattern {} of length {}",
                        id, node.depth, pattern, len
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_lens.len()
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// One pass over `text`. Offsets per pattern id, ascending.
    pub fn find_all(&self, text: &[char]) -> Vec<Offsets> {
        let mut matches: Vec<Offsets> = vec![Vec::new(); self.pattern_lens.len()];
        let mut state = ROOT;

        for (i, &c) in text.iter().enumerate() {
            state = self.step(state, c);
            for &pattern in &self.nodes[state].outputs {
                matches[pattern].push(i + 1 - self.pattern_lens[pattern]);
            }
        }

        matches
    }

    #[inline]
    fn step(&self, mut state: usize, c: char) -> usize {
        loop {
            if let Some(&next) = self.nodes[state].children.get(&c) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].failure;
        }
    }
}

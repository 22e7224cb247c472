// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact matching: three ways to find every occurrence of a pattern.
//!
//! - **Prefix function** (KMP): linear, never re-reads consumed text.
//! - **Bad character** (Boyer-Moore, bad-character rule only): compares right to
//!   left and skips ahead. Sub-linear on typical text, O(n·m) worst case.
//! - **Multi-pattern automaton** (Aho-Corasick): one pass for all patterns.
//!
//! All three take the normalized text as `&[char]` and return, per pattern, the
//! ascending and duplicate-free character offsets of every (possibly overlapping)
//! occurrence. For the same input they must return the same offsets. That is the
//! whole point of having one [`Algorithm`] enum in front of them: the caller picks
//! a strategy, never a semantics.

pub mod automaton;
pub mod bad_char;
pub mod prefix;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SearchError};

pub use automaton::Automaton;
pub use bad_char::BadCharMatcher;
pub use prefix::{failure_function, PrefixMatcher};

/// Ascending match offsets for one pattern.
pub type Offsets = Vec<usize>;

/// The exact-matching strategies this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    PrefixFunction,
    BadCharacter,
    MultiPatternAutomaton,
}

impl Algorithm {
    const ALL: [Algorithm; 3] = [
        Algorithm::PrefixFunction,
        Algorithm::BadCharacter,
        Algorithm::MultiPatternAutomaton,
    ];

    /// Every supported algorithm, in a fixed order.
    pub fn all() -> &'static [Algorithm] {
        &Self::ALL
    }

    /// Canonical name, also used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::PrefixFunction => "prefix-function",
            Algorithm::BadCharacter => "bad-character",
            Algorithm::MultiPatternAutomaton => "multi-pattern-automaton",
        }
    }

    /// Search `text` for every pattern. One offset list per pattern, same order.
    pub fn search<P: AsRef<[char]>>(self, text: &[char], patterns: &[P]) -> Result<Vec<Offsets>> {
        Ok(CompiledPatterns::compile(self, patterns)?.find_all(text))
    }

    /// [`Algorithm::search`] on plain strings. No normalization is applied.
    pub fn search_str(self, text: &str, patterns: &[&str]) -> Result<Vec<Offsets>> {
        let text: Vec<char> = text.chars().collect();
        let patterns: Vec<Vec<char>> = patterns.iter().map(|p| p.chars().collect()).collect();
        self.search(&text, &patterns)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "prefix-function" | "kmp" | "knuth-morris-pratt" => Ok(Algorithm::PrefixFunction),
            "bad-character" | "bm" | "boyer-moore" | "boyermoore" => Ok(Algorithm::BadCharacter),
            "multi-pattern-automaton" | "aho-corasick" | "ac" => {
                Ok(Algorithm::MultiPatternAutomaton)
            }
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Reject empty patterns before anything is built or scanned.
pub fn validate_patterns<P: AsRef<[char]>>(patterns: &[P]) -> Result<()> {
    match patterns.iter().position(|p| p.as_ref().is_empty()) {
        Some(index) => Err(SearchError::invalid_query(format!(
            "pattern #{} is empty",
            index
        ))),
        None => Ok(()),
    }
}

/// Patterns preprocessed for one algorithm.
///
/// Built once per query, then shared read-only across every document scan.
#[derive(Debug, Clone)]
pub enum CompiledPatterns {
    Prefix(Vec<PrefixMatcher>),
    BadChar(Vec<BadCharMatcher>),
    Automaton(Automaton),
}

impl CompiledPatterns {
    pub fn compile<P: AsRef<[char]>>(algorithm: Algorithm, patterns: &[P]) -> Result<Self> {
        validate_patterns(patterns)?;
        Ok(match algorithm {
            Algorithm::PrefixFunction => CompiledPatterns::Prefix(
                patterns
                    .iter()
                    .map(|p| PrefixMatcher::new(p.as_ref()))
                    .collect::<Result<_>>()?,
            ),
            Algorithm::BadCharacter => CompiledPatterns::BadChar(
                patterns
                    .iter()
                    .map(|p| BadCharMatcher::new(p.as_ref()))
                    .collect::<Result<_>>()?,
            ),
            Algorithm::MultiPatternAutomaton => {
                CompiledPatterns::Automaton(Automaton::build(patterns)?)
            }
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            CompiledPatterns::Prefix(_) => Algorithm::PrefixFunction,
            CompiledPatterns::BadChar(_) => Algorithm::BadCharacter,
            CompiledPatterns::Automaton(_) => Algorithm::MultiPatternAutomaton,
        }
    }

    pub fn pattern_count(&self) -> usize {
        match self {
            CompiledPatterns::Prefix(matchers) => matchers.len(),
            CompiledPatterns::BadChar(matchers) => matchers.len(),
            CompiledPatterns::Automaton(automaton) => automaton.pattern_count(),
        }
    }

    /// Offsets for every pattern, in compile order.
    pub fn find_all(&self, text: &[char]) -> Vec<Offsets> {
        match self {
            CompiledPatterns::Prefix(matchers) => {
                matchers.iter().map(|m| m.find_all(text)).collect()
            }
            CompiledPatterns::BadChar(matchers) => {
                matchers.iter().map(|m| m.find_all(text)).collect()
            }
            CompiledPatterns::Automaton(automaton) => automaton.find_all(text),
        }
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix-function (Knuth-Morris-Pratt) search.
//!
//! `f[i]` is the length of the longest proper prefix of `pattern[..=i]` that is also
//! a suffix of it. On a mismatch the pattern pointer falls back through `f` while
//! the text pointer only ever moves forward, so the scan is O(n + m).

use crate::error::{Result, SearchError};

use super::Offsets;

/// Compute the failure (border) array for `pattern`. `f[0] = 0`.
///
/// ```
/// use cvsift::matcher::failure_function;
///
/// let pattern: Vec<char> = "ababaca".chars().collect();
/// assert_eq!(failure_function(&pattern), vec![0, 0, 1, 2, 3, 0, 1]);
/// ```
pub fn failure_function(pattern: &[char]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut border = 0;

    for i in 1..pattern.len() {
        while border > 0 && pattern[i] != pattern[border] {
            border = failure[border - 1];
        }
        if pattern[i] == pattern[border] {
            border += 1;
        }
        failure[i] = border;
    }

    failure
}

/// A pattern with its failure array precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatcher {
    pattern: Vec<char>,
    failure: Vec<usize>,
}

impl PrefixMatcher {
    pub fn new(pattern: &[char]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(SearchError::invalid_query("pattern is empty"));
        }
        Ok(Self {
            pattern: pattern.to_vec(),
            failure: failure_function(pattern),
        })
    }

    pub fn failure(&self) -> &[usize] {
        &self.failure
    }

    /// Every occurrence of the pattern in `text`, overlaps included.
    pub fn find_all(&self, text: &[char]) -> Offsets {
        let m = self.pattern.len();
        let mut matches = Vec::new();
        if m > text.len() {
            return matches;
        }

        let mut matched = 0;
        for (i, &c) in text.iter().enumerate() {
            while matched > 0 && self.pattern[matched] != c {
                matched = self.failure[matched - 1];
            }
            if self.pattern[matched] == c {
                matched += 1;
            }
            if matched == m {
                matches.push(i + 1 - m);
                matched = self.failure[m - 1];
            }
        }

        matches
    }
}

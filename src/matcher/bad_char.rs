// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boyer-Moore search with the bad-character rule only.
//!
//! Each alignment is compared right to left. On a mismatch at pattern position `j`
//! against text character `c`, the window moves by `max(1, j - last(c))` where
//! `last(c)` is the rightmost index of `c` in the pattern (-1 if absent). After a
//! full match the window moves so the character just past it lines up with its last
//! occurrence in the pattern, which still keeps overlapping matches reachable.
//!
//! Without the good-suffix rule the worst case is O(n·m). That is accepted.

use std::collections::HashMap;

use crate::error::{Result, SearchError};

use super::Offsets;

/// Rightmost index of each character in the pattern.
///
/// ASCII lives in a flat table; everything else in a map. Résumé text is mostly
/// ASCII after normalization, so the map is rarely touched.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LastOccurrence {
    ascii: [isize; 128],
    other: HashMap<char, isize>,
}

impl LastOccurrence {
    fn new(pattern: &[char]) -> Self {
        let mut table = Self {
            ascii: [-1; 128],
            other: HashMap::new(),
        };
        for (i, &c) in pattern.iter().enumerate() {
            if c.is_ascii() {
                table.ascii[c as usize] = i as isize;
            } else {
                table.other.insert(c, i as isize);
            }
        }
        table
    }

    #[inline]
    fn get(&self, c: char) -> isize {
        if c.is_ascii() {
            self.ascii[c as usize]
        } else {
            self.other.get(&c).copied().unwrap_or(-1)
        }
    }
}

/// A pattern with its last-occurrence table precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadCharMatcher {
    pattern: Vec<char>,
    last: LastOccurrence,
}

impl BadCharMatcher {
    pub fn new(pattern: &[char]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(SearchError::invalid_query("pattern is empty"));
        }
        Ok(Self {
            pattern: pattern.to_vec(),
            last: LastOccurrence::new(pattern),
        })
    }

    /// Last index of `c` in the pattern, or -1.
    pub fn last_occurrence(&self, c: char) -> isize {
        self.last.get(c)
    }

    /// Shift after a mismatch at pattern position `j` against text character `c`.
    /// Always at least 1.
    #[inline]
    pub fn mismatch_shift(&self, j: usize, c: char) -> usize {
        (j as isize - self.last.get(c)).max(1) as usize
    }

    /// Shift after a full match, given the text character right after the window.
    #[inline]
    fn match_shift(&self, next: Option<char>) -> usize {
        match next {
            Some(c) => (self.pattern.len() as isize - self.last.get(c)).max(1) as usize,
            None => 1,
        }
    }

    /// Every occurrence of the pattern in `text`, overlaps included.
    pub fn find_all(&self, text: &[char]) -> Offsets {
        let m = self.pattern.len();
        let n = text.len();
        let mut matches = Vec::new();
        if m > n {
            return matches;
        }

        let mut shift = 0;
        while shift <= n - m {
            let mut j = m;
            while j > 0 && self.pattern[j - 1] == text[shift + j - 1] {
                j -= 1;
            }

            if j == 0 {
                matches.push(shift);
                shift += self.match_shift(text.get(shift + m).copied());
            } else {
                shift += self.mismatch_shift(j - 1, text[shift + j - 1]);
            }
        }

        matches
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token-level fuzzy fallback.
//!
//! A term of `k` words is compared against every window of `k` consecutive tokens
//! of the normalized text. Windows whose length differs from the term by more than
//! the edit budget are skipped before any DP runs, and the number of windows
//! examined per (term, document) is capped so a huge document can't blow up a
//! query.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::levenshtein::{bounded_levenshtein, similarity_from_distance};

/// Punctuation trimmed from token edges before comparing ("python," → "python").
const EDGE_PUNCTUATION: &[char] = &['.', ',', ';', ':', '(', ')', '/', '\\', '-', '@'];

/// How many edits a term of a given length may absorb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuzzyThreshold {
    /// `floor(fraction * len)` edits, at least one.
    Fraction(f64),
    /// The same number of edits for every term.
    MaxEdits(usize),
    /// Accept a candidate whose [`similarity`](super::similarity) to the term is
    /// at least this percentage, e.g. `70.0`.
    MinSimilarity(f64),
}

impl Default for FuzzyThreshold {
    fn default() -> Self {
        FuzzyThreshold::Fraction(0.3)
    }
}

impl FuzzyThreshold {
    /// Edit budget for a term of `term_len` characters against a candidate of
    /// the same length.
    pub fn max_edits(self, term_len: usize) -> usize {
        self.budget(term_len, term_len)
    }

    /// Edit budget for a term of `term_len` characters against a candidate of
    /// `candidate_len` characters. Only `MinSimilarity` depends on the candidate.
    ///
    /// Never reaches `term_len`, so an accepted match always keeps a positive weight.
    pub fn budget(self, term_len: usize, candidate_len: usize) -> usize {
        let budget = match self {
            FuzzyThreshold::Fraction(fraction) => {
                ((fraction * term_len as f64).floor() as usize).max(1)
            }
            FuzzyThreshold::MaxEdits(edits) => edits,
            FuzzyThreshold::MinSimilarity(percent) => {
                similarity_budget(percent, term_len.max(candidate_len))
            }
        };
        budget.min(term_len.saturating_sub(1))
    }
}

/// Largest distance whose similarity over `max_len` characters still reaches
/// `percent`, checked with the same arithmetic as [`super::similarity`].
fn similarity_budget(percent: f64, max_len: usize) -> usize {
    if max_len == 0 {
        return 0;
    }
    let passes = |d: usize| similarity_from_distance(d, max_len) >= percent;
    let mut budget = ((1.0 - percent / 100.0).max(0.0) * max_len as f64).floor() as usize;
    budget = budget.min(max_len);
    while budget < max_len && passes(budget + 1) {
        budget += 1;
    }
    while budget > 0 && !passes(budget) {
        budget -= 1;
    }
    budget
}

/// Fuzzy fallback settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyOptions {
    /// Run the fallback at all.
    pub enabled: bool,
    pub threshold: FuzzyThreshold,
    /// Terms and tokens shorter than this never fuzzy match.
    pub min_token_len: usize,
    /// Windows examined per (term, document).
    pub max_tokens: usize,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: FuzzyThreshold::default(),
            min_token_len: 3,
            max_tokens: 20_000,
        }
    }
}

/// One accepted approximate match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyHit {
    /// The matched token (or token window) as it appears in the normalized text.
    pub token: String,
    pub distance: usize,
    /// Character offset of the token in the normalized text.
    pub offset: usize,
}

impl FuzzyHit {
    /// `1 - distance / term_len`. Strictly positive for accepted hits.
    pub fn weight(&self, term_len: usize) -> f64 {
        if term_len == 0 {
            return 0.0;
        }
        1.0 - self.distance as f64 / term_len as f64
    }
}

/// A whitespace-delimited token, edge punctuation trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token {
    start: usize,
    end: usize,
}

/// Split normalized text (single spaces between words) into trimmed tokens.
fn tokenize(text: &[char]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for end in (0..=text.len()).filter(|&i| i == text.len() || text[i] == ' ') {
        let mut token = Token { start, end };
        while token.start < token.end && EDGE_PUNCTUATION.contains(&text[token.start]) {
            token.start += 1;
        }
        while token.end > token.start && EDGE_PUNCTUATION.contains(&text[token.end - 1]) {
            token.end -= 1;
        }
        if token.start < token.end {
            tokens.push(token);
        }
        start = end + 1;
    }
    tokens
}

/// Bounded edit-distance matcher over document tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FuzzyMatcher {
    options: FuzzyOptions,
}

impl FuzzyMatcher {
    pub fn new(options: FuzzyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> FuzzyOptions {
        self.options
    }

    /// Every token window of `text` within the edit budget of `term`, by offset.
    ///
    /// Both inputs must already be normalized.
    pub fn find(&self, term: &[char], text: &[char]) -> Vec<FuzzyHit> {
        let term_len = term.len();
        if !self.options.enabled || term_len < self.options.min_token_len {
            return Vec::new();
        }
        let threshold = self.options.threshold;

        let words = term.iter().filter(|&&c| c == ' ').count() + 1;
        let tokens = tokenize(text);
        if tokens.len() < words {
            return Vec::new();
        }

        let windows = tokens.len() + 1 - words;
        if windows > self.options.max_tokens {
            trace!(
                windows,
                limit = self.options.max_tokens,
                "fuzzy scan truncated"
            );
        }

        let mut hits = Vec::new();
        let mut candidate: Vec<char> = Vec::with_capacity(term_len * 2);
        for first in 0..windows.min(self.options.max_tokens) {
            // Words joined by single spaces; punctuation-only tokens between
            // them were dropped by the tokenizer and stay out of the candidate.
            candidate.clear();
            for (i, token) in tokens[first..first + words].iter().enumerate() {
                if i > 0 {
                    candidate.push(' ');
                }
                candidate.extend_from_slice(&text[token.start..token.end]);
            }

            let budget = threshold.budget(term_len, candidate.len());
            if budget == 0
                || candidate.len() < self.options.min_token_len
                || candidate.len().abs_diff(term_len) > budget
            {
                continue;
            }

            if let Some(distance) = bounded_levenshtein(term, &candidate, budget) {
                hits.push(FuzzyHit {
                    token: candidate.iter().collect(),
                    distance,
                    offset: tokens[first].start,
                });
            }
        }

        hits
    }
}

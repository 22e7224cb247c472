// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the matching pipeline.
//!
//! Debug-mode assertions on the properties every search result must have. They are
//! zero-cost in release builds (`debug_assert!`) and catch an algorithm drifting
//! from its siblings long before a user sees a wrong ranking.
//!
//! | Contract                        | Property                                      |
//! |---------------------------------|-----------------------------------------------|
//! | `check_offsets_ascending`       | offsets strictly ascending, hence unique      |
//! | `check_offsets_are_occurrences` | every offset really starts the pattern        |
//! | `check_fuzzy_distance`          | `distance <= budget < term_len`               |
//! | `check_ranked`                  | positive scores, ranking order respected      |
//!
//! The structural automaton check is not here: a broken automaton must fail in
//! release builds too, so [`crate::matcher::Automaton::verify`] returns an error.

use std::cmp::Ordering;

use crate::scoring::{compare_results, DEFAULT_EXACT_WEIGHT, DEFAULT_FUZZY_WEIGHT};
use crate::types::SearchResult;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

// A fuzzy hit must never outweigh an exact occurrence under the defaults.
const _: () = assert!(DEFAULT_FUZZY_WEIGHT <= DEFAULT_EXACT_WEIGHT);

// ============================================================================
// MATCH CONTRACTS
// ============================================================================

/// Offsets are strictly ascending.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_offsets_ascending(offsets: &[usize]) {
    for (i, pair) in offsets.windows(2).enumerate() {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: offsets[{}] = {} is not below offsets[{}] = {}",
            i,
            pair[0],
            i + 1,
            pair[1]
        );
    }
}

/// Every offset is an occurrence of `pattern` in `text`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_offsets_are_occurrences(text: &[char], pattern: &[char], offsets: &[usize]) {
    for &offset in offsets {
        debug_assert!(
            text.get(offset..offset + pattern.len()) == Some(pattern),
            "Contract violation: no occurrence of {:?} at offset {}",
            pattern.iter().collect::<String>(),
            offset
        );
    }
}

/// A fuzzy hit stays within its budget and below the term length.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_fuzzy_distance(distance: usize, budget: usize, term_len: usize) {
    debug_assert!(
        distance <= budget && distance < term_len,
        "Contract violation: fuzzy distance {} exceeds budget {} (term length {})",
        distance,
        budget,
        term_len
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Results are positive and in ranking order.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_ranked(results: &[SearchResult]) {
    for (i, result) in results.iter().enumerate() {
        debug_assert!(
            result.total_score > 0.0,
            "Contract violation: results[{}] (doc {}) has score {}",
            i,
            result.document_id,
            result.total_score
        );
    }
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            compare_results(&pair[0], &pair[1]) != Ordering::Greater,
            "Contract violation: results[{}] (doc {}, {}) ranks after results[{}] (doc {}, {})",
            i,
            pair[0].document_id,
            pair[0].total_score,
            i + 1,
            pair[1].document_id,
            pair[1].total_score
        );
    }
}

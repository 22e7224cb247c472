// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Doc ID** - ascending, so ties never depend on scan or completion order

use std::cmp::Ordering;

use crate::types::SearchResult;

/// Compare two search results for ranking. `Less` means `a` ranks first.
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    match b.total_score.total_cmp(&a.total_score) {
        Ordering::Equal => a.document_id.cmp(&b.document_id),
        ord => ord,
    }
}

/// Drop zero-score results, sort, and keep the first `limit` (all if `None`).
pub fn rank(mut results: Vec<SearchResult>, limit: Option<usize>) -> Vec<SearchResult> {
    results.retain(|r| r.total_score > 0.0);
    results.sort_by(compare_results);
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    results
}

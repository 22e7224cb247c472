// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query preparation: everything that happens once per call, before any document.
//!
//! Terms are normalized with the engine's normalizer, duplicates collapsed (first
//! occurrence wins), and the exact-match strategy picked and compiled. Any problem
//! with the query surfaces here, so a bad query never touches the corpus.

use tracing::debug;

use crate::error::{Result, SearchError};
use crate::matcher::{Algorithm, CompiledPatterns};
use crate::normalize::Normalizer;
use crate::types::Query;

/// A normalized query term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Term {
    pub text: String,
    pub chars: Vec<char>,
}

/// A query ready to run against documents. Read-only, shared across workers.
#[derive(Debug, Clone)]
pub(crate) struct PreparedQuery {
    pub terms: Vec<Term>,
    pub patterns: CompiledPatterns,
}

impl PreparedQuery {
    pub fn algorithm(&self) -> Algorithm {
        self.patterns.algorithm()
    }
}

/// Pick the exact-match strategy for `distinct_terms` terms.
pub(crate) fn select_algorithm(
    requested: Algorithm,
    distinct_terms: usize,
    batch_multi_term: bool,
) -> Algorithm {
    if batch_multi_term && distinct_terms > 1 {
        Algorithm::MultiPatternAutomaton
    } else {
        requested
    }
}

/// Normalize, deduplicate and compile. `Ok(None)` for an empty term list.
pub(crate) fn prepare(
    query: &Query,
    normalizer: &Normalizer,
    batch_multi_term: bool,
) -> Result<Option<PreparedQuery>> {
    if query.terms.is_empty() {
        return Ok(None);
    }

    let mut terms: Vec<Term> = Vec::with_capacity(query.terms.len());
    for raw in &query.terms {
        let text = normalizer.normalize_term(raw);
        if text.is_empty() {
            return Err(SearchError::invalid_query(format!(
                "term {:?} is empty after normalization",
                raw
            )));
        }
        if terms.iter().any(|t| t.text == text) {
            continue;
        }
        terms.push(Term {
            chars: text.chars().collect(),
            text,
        });
    }

    let algorithm = select_algorithm(query.algorithm, terms.len(), batch_multi_term);
    let chars: Vec<&[char]> = terms.iter().map(|t| t.chars.as_slice()).collect();
    let patterns = CompiledPatterns::compile(algorithm, &chars)?;

    debug!(
        requested = %query.algorithm,
        selected = %algorithm,
        terms = terms.len(),
        duplicates = query.terms.len() - terms.len(),
        "query prepared"
    );

    Ok(Some(PreparedQuery { terms, patterns }))
}

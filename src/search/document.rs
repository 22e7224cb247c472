// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring one document against a prepared query.
//!
//! Exact phase first, for all terms at once. Only terms with zero exact occurrences
//! go to the fuzzy fallback. Nothing here can fail: an unreadable document simply
//! produces no result.

use std::borrow::Cow;
use std::time::{Duration, Instant};

use tracing::{trace, warn};

use crate::contracts::{check_fuzzy_distance, check_offsets_are_occurrences, check_offsets_ascending};
use crate::fuzzy::{FuzzyHit, FuzzyMatcher};
use crate::normalize::{NormalizedText, Normalizer};
use crate::scoring::ScoringWeights;
use crate::types::{Document, MatchEvidence, MatchKind, SearchResult};

use super::prepare::{PreparedQuery, Term};

/// What scoring one document produced, besides the result itself.
#[derive(Debug, Default)]
pub(crate) struct DocumentOutcome {
    pub result: Option<SearchResult>,
    pub skipped: bool,
    pub fuzzy_invocations: usize,
    pub exact_time: Duration,
    pub fuzzy_time: Duration,
}

/// Read-only pieces of the engine a document scan needs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentScorer<'a> {
    pub normalizer: &'a Normalizer,
    pub fuzzy: &'a FuzzyMatcher,
    pub weights: &'a ScoringWeights,
}

impl DocumentScorer<'_> {
    pub fn score(&self, query: &PreparedQuery, doc: &Document) -> DocumentOutcome {
        let mut outcome = DocumentOutcome::default();

        let Some(source) = doc.source_text() else {
            warn!(doc = %doc.id(), "document text unavailable, scoring zero");
            outcome.skipped = true;
            return outcome;
        };

        // Documents built with different options get renormalized so terms and
        // text always go through the same rules.
        let normalized: Cow<'_, NormalizedText> =
            if doc.normalized_with() == self.normalizer.options() {
                Cow::Borrowed(doc.normalized())
            } else {
                Cow::Owned(self.normalizer.normalize(source))
            };
        if normalized.is_empty() {
            trace!(doc = %doc.id(), "empty document");
            return outcome;
        }
        let text = normalized.chars();

        let started = Instant::now();
        let exact = query.patterns.find_all(text);
        outcome.exact_time = started.elapsed();

        let mut evidence: Vec<MatchEvidence> = Vec::new();
        let mut matched_terms = 0usize;

        for (term, offsets) in query.terms.iter().zip(exact) {
            let before = evidence.len();

            if offsets.is_empty() {
                if !self.fuzzy.options().enabled {
                    continue;
                }
                outcome.fuzzy_invocations += 1;
                let started = Instant::now();
                let hits = self.fuzzy.find(&term.chars, text);
                outcome.fuzzy_time += started.elapsed();
                self.push_fuzzy(doc, term, hits, &normalized, &mut evidence);
            } else {
                check_offsets_ascending(&offsets);
                check_offsets_are_occurrences(text, &term.chars, &offsets);
                evidence.push(MatchEvidence {
                    document_id: doc.id(),
                    term: term.text.clone(),
                    kind: MatchKind::Exact {
                        occurrences: offsets.len(),
                    },
                    source_positions: normalized.map_to_source(&offsets),
                    score: self.weights.exact_score(offsets.len()),
                    positions: offsets,
                });
            }

            if evidence.len() > before {
                matched_terms += 1;
            }
        }

        let total_score: f64 = evidence.iter().map(|e| e.score).sum();
        trace!(doc = %doc.id(), score = total_score, matched_terms, "document scored");

        if total_score > 0.0 {
            outcome.result = Some(SearchResult {
                document_id: doc.id(),
                total_score,
                coverage: matched_terms as f64 / query.terms.len() as f64,
                evidence,
            });
        }

        outcome
    }

    /// One evidence entry per distinct matched token, in order of first appearance.
    fn push_fuzzy(
        &self,
        doc: &Document,
        term: &Term,
        hits: Vec<FuzzyHit>,
        normalized: &NormalizedText,
        evidence: &mut Vec<MatchEvidence>,
    ) {
        let term_len = term.chars.len();
        let threshold = self.fuzzy.options().threshold;
        let first = evidence.len();

        for hit in hits {
            let budget = threshold.budget(term_len, hit.token.chars().count());
            check_fuzzy_distance(hit.distance, budget, term_len);
            let score = self.weights.fuzzy_score(hit.distance, term_len);
            if score <= 0.0 {
                continue;
            }

            let existing = evidence[first..].iter_mut().find(|e| {
                matches!(&e.kind, MatchKind::Fuzzy { matched_token, .. } if *matched_token == hit.token)
            });
            match existing {
                Some(entry) => {
                    entry.positions.push(hit.offset);
                    entry.score += score;
                }
                None => evidence.push(MatchEvidence {
                    document_id: doc.id(),
                    term: term.text.clone(),
                    kind: MatchKind::Fuzzy {
                        edit_distance: hit.distance,
                        matched_token: hit.token,
                    },
                    positions: vec![hit.offset],
                    source_positions: Vec::new(),
                    score,
                }),
            }
        }

        for entry in &mut evidence[first..] {
            check_offsets_ascending(&entry.positions);
            entry.source_positions = normalized.map_to_source(&entry.positions);
        }
    }
}

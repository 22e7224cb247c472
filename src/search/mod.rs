// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: query in, ranked documents out.
//!
//! One call runs in three steps:
//!
//! ```text
//! Query ──prepare──▶ PreparedQuery ──per document──▶ DocumentOutcome ──rank──▶ Vec<SearchResult>
//!        normalize,                  exact phase,                     score desc,
//!        dedup, compile              fuzzy fallback                   DocId asc, limit
//! ```
//!
//! Query errors surface before any document is touched. Documents are scored
//! independently (on the rayon pool when the `parallel` feature and
//! [`SearchConfig::parallel`] are both on), so the ranking never depends on
//! scheduling.

mod cancel;
mod document;
mod prepare;

pub use cancel::CancelToken;

use std::time::Instant;

use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SearchConfig;
use crate::contracts::check_ranked;
use crate::error::{Result, SearchError};
use crate::fuzzy::FuzzyMatcher;
use crate::matcher::Algorithm;
use crate::normalize::Normalizer;
use crate::scoring::rank;
use crate::types::{DocId, Document, Query, SearchReport, SearchResult, SearchStats};

use document::{DocumentOutcome, DocumentScorer};
use prepare::{prepare, PreparedQuery};

/// Stateless between calls; share it freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchEngine {
    config: SearchConfig,
    normalizer: Normalizer,
    fuzzy: FuzzyMatcher,
}

impl Default for SearchEngine {
    fn default() -> Self {
        let config = SearchConfig::default();
        Self {
            normalizer: Normalizer::new(config.normalizer),
            fuzzy: FuzzyMatcher::new(config.fuzzy),
            config,
        }
    }
}

impl SearchEngine {
    /// Build an engine, rejecting an invalid configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            normalizer: Normalizer::new(config.normalizer),
            fuzzy: FuzzyMatcher::new(config.fuzzy),
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// A document normalized with this engine's options, so searches never
    /// renormalize it.
    pub fn document(&self, id: impl Into<DocId>, text: impl Into<String>) -> Document {
        Document::with_normalizer(id, text, &self.normalizer)
    }

    /// Rank `corpus` against `query`. `limit: None` returns every qualifying document.
    ///
    /// ```
    /// use cvsift::{Algorithm, Document, Query, SearchEngine};
    ///
    /// let corpus = vec![
    ///     Document::new(1, "Backend engineer: Go, Postgres"),
    ///     Document::new(2, "Rust engineer. Rust, Tokio, Postgres"),
    /// ];
    /// let query = Query::new(["rust", "postgres"], Algorithm::BadCharacter);
    /// let results = SearchEngine::default().search(&query, &corpus, None).unwrap();
    ///
    /// assert_eq!(results[0].document_id.get(), 2);
    /// assert_eq!(results[0].total_score, 3.0);
    /// assert_eq!(results[1].document_id.get(), 1);
    /// ```
    pub fn search(
        &self,
        query: &Query,
        corpus: &[Document],
        limit: Option<usize>,
    ) -> Result<Vec<SearchResult>> {
        Ok(self.search_with_stats(query, corpus, limit)?.results)
    }

    /// Like [`SearchEngine::search`], plus counters and phase timings.
    pub fn search_with_stats(
        &self,
        query: &Query,
        corpus: &[Document],
        limit: Option<usize>,
    ) -> Result<SearchReport> {
        self.run(query, corpus, limit, None)
    }

    /// Like [`SearchEngine::search_with_stats`], stopping with
    /// [`SearchError::Cancelled`] once `cancel` is set. Checked between documents.
    pub fn search_cancellable(
        &self,
        query: &Query,
        corpus: &[Document],
        limit: Option<usize>,
        cancel: &CancelToken,
    ) -> Result<SearchReport> {
        self.run(query, corpus, limit, Some(cancel))
    }

    fn run(
        &self,
        query: &Query,
        corpus: &[Document],
        limit: Option<usize>,
        cancel: Option<&CancelToken>,
    ) -> Result<SearchReport> {
        let started = Instant::now();

        let Some(prepared) = prepare(query, &self.normalizer, self.config.batch_multi_term)? else {
            debug!("empty query, nothing to search");
            return Ok(SearchReport {
                results: Vec::new(),
                stats: SearchStats {
                    documents: corpus.len(),
                    ..SearchStats::default()
                },
            });
        };

        let scorer = DocumentScorer {
            normalizer: &self.normalizer,
            fuzzy: &self.fuzzy,
            weights: &self.config.weights,
        };
        let outcomes = self.score_all(&scorer, &prepared, corpus, cancel);

        let mut stats = SearchStats {
            algorithm: Some(prepared.algorithm()),
            documents: corpus.len(),
            ..SearchStats::default()
        };
        let mut results = Vec::new();
        let mut cancelled = false;

        for outcome in outcomes {
            let Some(outcome) = outcome else {
                cancelled = true;
                continue;
            };
            if outcome.skipped {
                stats.skipped += 1;
            } else {
                stats.scanned += 1;
            }
            stats.fuzzy_invocations += outcome.fuzzy_invocations;
            stats.exact_time += outcome.exact_time;
            stats.fuzzy_time += outcome.fuzzy_time;
            results.extend(outcome.result);
        }

        if cancelled {
            let scanned = stats.scanned + stats.skipped;
            debug!(scanned, documents = corpus.len(), "search cancelled");
            return Err(SearchError::Cancelled { scanned });
        }

        stats.qualifying = results.len();
        let results = rank(results, limit);
        check_ranked(&results);

        debug!(
            algorithm = %prepared.algorithm(),
            documents = stats.documents,
            scanned = stats.scanned,
            skipped = stats.skipped,
            qualifying = stats.qualifying,
            returned = results.len(),
            fuzzy_invocations = stats.fuzzy_invocations,
            elapsed_us = started.elapsed().as_micros() as u64,
            "search complete"
        );

        Ok(SearchReport { results, stats })
    }

    /// One outcome per document, in corpus order. `None` marks a document that
    /// was never started because the search was cancelled.
    fn score_all(
        &self,
        scorer: &DocumentScorer<'_>,
        query: &PreparedQuery,
        corpus: &[Document],
        cancel: Option<&CancelToken>,
    ) -> Vec<Option<DocumentOutcome>> {
        let score_one = |doc: &Document| {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return None;
            }
            Some(scorer.score(query, doc))
        };

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return corpus.par_iter().map(score_one).collect();
            }
        }

        corpus.iter().map(score_one).collect()
    }
}

/// Names of the supported exact-matching algorithms, in a stable order.
pub fn list_supported_algorithms() -> Vec<&'static str> {
    Algorithm::all().iter().map(|a| a.name()).collect()
}

/// Search with a default-configured engine.
pub fn search(query: &Query, corpus: &[Document], limit: Option<usize>) -> Result<Vec<SearchResult>> {
    SearchEngine::default().search(query, corpus, limit)
}

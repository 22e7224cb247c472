// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search call.
//!
//! | Type            | Lifetime                | Purpose                              |
//! |-----------------|-------------------------|--------------------------------------|
//! | `Document`      | caller-owned            | Extracted résumé text + normalized form |
//! | `Query`         | one call                | Ordered terms + requested algorithm  |
//! | `MatchEvidence` | one call                | Why a document matched a term        |
//! | `SearchResult`  | one call                | Score + evidence for one document    |
//! | `SearchReport`  | one call                | Results + phase statistics           |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **MatchEvidence**: `positions` strictly ascending; fuzzy `edit_distance` within
//!   the configured budget and below the term length.
//! - **SearchResult**: `total_score > 0`; evidence unique per (term, matched token).
//! - **Result lists**: descending score, ascending `DocId` on ties.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matcher::Algorithm;
use crate::normalize::{NormalizedText, Normalizer, NormalizerOptions};

// =============================================================================
// DOCUMENTS
// =============================================================================

/// Caller-assigned document identifier. Also the ranking tie-breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(pub u64);

impl DocId {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracted, already-decrypted document text. Immutable once constructed.
///
/// A document whose text could not be obtained upstream is still representable
/// ([`Document::unreadable`]); it scores zero instead of failing the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: DocId,
    source_text: Option<String>,
    normalized: NormalizedText,
    normalized_with: NormalizerOptions,
}

impl Document {
    /// Build a document, normalizing with default options.
    pub fn new(id: impl Into<DocId>, text: impl Into<String>) -> Self {
        Self::with_normalizer(id, text, &Normalizer::default())
    }

    /// Build a document, normalizing with `normalizer`.
    pub fn with_normalizer(
        id: impl Into<DocId>,
        text: impl Into<String>,
        normalizer: &Normalizer,
    ) -> Self {
        let text = text.into();
        Self {
            id: id.into(),
            normalized: normalizer.normalize(&text),
            normalized_with: normalizer.options(),
            source_text: Some(text),
        }
    }

    /// A document whose text the extraction layer could not provide.
    pub fn unreadable(id: impl Into<DocId>) -> Self {
        Self {
            id: id.into(),
            source_text: None,
            normalized: NormalizedText::default(),
            normalized_with: NormalizerOptions::default(),
        }
    }

    pub fn id(&self) -> DocId {
        self.id
    }

    /// Original text, `None` for unreadable documents.
    pub fn source_text(&self) -> Option<&str> {
        self.source_text.as_deref()
    }

    pub fn normalized(&self) -> &NormalizedText {
        &self.normalized
    }

    pub fn is_readable(&self) -> bool {
        self.source_text.is_some()
    }

    /// Options the stored normalized text was produced with.
    pub fn normalized_with(&self) -> NormalizerOptions {
        self.normalized_with
    }
}

// =============================================================================
// QUERY
// =============================================================================

/// Terms to look for, in caller order (duplicates allowed), and the algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub terms: Vec<String>,
    pub algorithm: Algorithm,
}

impl Query {
    pub fn new<I, S>(terms: I, algorithm: Algorithm) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
            algorithm,
        }
    }

    /// Split a comma-separated keyword list, dropping blank entries.
    ///
    /// ```
    /// use cvsift::{Algorithm, Query};
    ///
    /// let query = Query::parse("Rust, , distributed systems ,SQL", Algorithm::PrefixFunction);
    /// assert_eq!(query.terms, vec!["Rust", "distributed systems", "SQL"]);
    /// ```
    pub fn parse(keywords: &str, algorithm: Algorithm) -> Self {
        Self::new(
            keywords
                .split(',')
                .map(str::trim)
                .filter(|kw| !kw.is_empty()),
            algorithm,
        )
    }

    /// Like [`Query::parse`] but with the algorithm given by name.
    pub fn parse_named(keywords: &str, algorithm: &str) -> Result<Self> {
        Ok(Self::parse(keywords, algorithm.parse()?))
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

// =============================================================================
// EVIDENCE & RESULTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Fuzzy,
}

/// How a term matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match_type", rename_all = "lowercase")]
pub enum MatchKind {
    Exact {
        occurrences: usize,
    },
    Fuzzy {
        edit_distance: usize,
        matched_token: String,
    },
}

/// Why one document matched one term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvidence {
    pub document_id: DocId,
    /// The normalized term.
    pub term: String,
    #[serde(flatten)]
    pub kind: MatchKind,
    /// Character offsets in the normalized text, strictly ascending.
    pub positions: Vec<usize>,
    /// Byte offsets in the source text, strictly ascending.
    pub source_positions: Vec<usize>,
    /// Contribution of this evidence to the document score.
    pub score: f64,
}

impl MatchEvidence {
    pub fn match_type(&self) -> MatchType {
        match self.kind {
            MatchKind::Exact { .. } => MatchType::Exact,
            MatchKind::Fuzzy { .. } => MatchType::Fuzzy,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.match_type() == MatchType::Exact
    }

    /// Exact occurrence count; zero for fuzzy evidence.
    pub fn occurrences(&self) -> usize {
        match self.kind {
            MatchKind::Exact { occurrences } => occurrences,
            MatchKind::Fuzzy { .. } => 0,
        }
    }

    /// Edit distance for fuzzy evidence.
    pub fn edit_distance(&self) -> Option<usize> {
        match self.kind {
            MatchKind::Fuzzy { edit_distance, .. } => Some(edit_distance),
            MatchKind::Exact { .. } => None,
        }
    }
}

/// One ranked document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document_id: DocId,
    pub total_score: f64,
    /// Matched distinct terms divided by distinct query terms.
    pub coverage: f64,
    /// Ordered by query term order, then by first position.
    pub evidence: Vec<MatchEvidence>,
}

impl SearchResult {
    /// Distinct terms with any evidence, in query order.
    pub fn matched_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = Vec::new();
        for evidence in &self.evidence {
            if terms.last() != Some(&evidence.term.as_str()) {
                terms.push(&evidence.term);
            }
        }
        terms
    }

    pub fn has_fuzzy_evidence(&self) -> bool {
        self.evidence.iter().any(|e| !e.is_exact())
    }
}

/// Per-call counters and phase timings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Algorithm actually used for the exact phase (`None` when nothing ran).
    pub algorithm: Option<Algorithm>,
    pub documents: usize,
    /// Documents whose text was scanned.
    pub scanned: usize,
    /// Unreadable documents, scored zero.
    pub skipped: usize,
    /// Documents with a positive score, before truncation.
    pub qualifying: usize,
    /// (term, document) pairs that went to the fuzzy fallback.
    pub fuzzy_invocations: usize,
    pub exact_time: Duration,
    pub fuzzy_time: Duration,
}

/// Results plus the statistics gathered while producing them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub results: Vec<SearchResult>,
    pub stats: SearchStats,
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword search over extracted résumé text.
//!
//! Given query terms and a corpus of documents, every document is scanned with one
//! of three exact string-matching strategies. Terms with no exact occurrence fall
//! back to token-level edit-distance matching. Documents are scored from the
//! evidence and ranked.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │ normalize.rs │────▶│     matcher/     │────▶│  scoring/    │
//! │ (Normalizer, │     │ prefix, bad_char,│     │ (weights,    │
//! │ position map)│     │ automaton        │     │  rank)       │
//! └──────────────┘     └──────────────────┘     └──────────────┘
//!        │                     │  no exact hit          ▲
//!        │                     ▼                        │
//!        │             ┌──────────────────┐             │
//!        └────────────▶│     fuzzy/       │─────────────┘
//!                      │ (bounded edit    │
//!                      │  distance)       │
//!                      └──────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                       search/                           │
//! │  (SearchEngine: prepare query, score documents on the   │
//! │   rayon pool, rank, report stats, honor cancellation)   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Guarantees
//!
//! | Property                    | Where it is enforced                     |
//! |-----------------------------|------------------------------------------|
//! | Algorithms agree on offsets | `matcher` tests + `tests/property`       |
//! | Fuzzy never beats exact     | `contracts` (const assert) + `config`    |
//! | Deterministic ranking       | `scoring::ranking::compare_results`      |
//! | Automaton well-formed       | `matcher::Automaton::verify`             |
//!
//! # Usage
//!
//! ```
//! use cvsift::{Algorithm, Document, Query, SearchEngine};
//!
//! let corpus = vec![
//!     Document::new(1, "Senior Python developer. Django, PostgreSQL."),
//!     Document::new(2, "Pythn scripting and some SQL"),
//! ];
//! let query = Query::parse("python", Algorithm::BadCharacter);
//!
//! let results = SearchEngine::default().search(&query, &corpus, Some(10)).unwrap();
//! assert_eq!(results.len(), 2);
//! assert!(results[0].evidence[0].is_exact());
//! assert!(results[1].has_fuzzy_evidence());
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod fuzzy;
pub mod matcher;
pub mod normalize;
pub mod scoring;
pub mod search;
pub mod types;

// Re-exports for public API
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use fuzzy::{
    bounded_levenshtein, levenshtein, levenshtein_within, similarity, FuzzyHit, FuzzyMatcher,
    FuzzyOptions, FuzzyThreshold,
};
pub use matcher::{Algorithm, Automaton, BadCharMatcher, CompiledPatterns, PrefixMatcher};
pub use normalize::{normalize, NormalizedText, Normalizer, NormalizerOptions};
pub use scoring::{compare_results, rank, ScoringWeights};
pub use search::{list_supported_algorithms, search, CancelToken, SearchEngine};
pub use types::{
    DocId, Document, MatchEvidence, MatchKind, MatchType, Query, SearchReport, SearchResult,
    SearchStats,
};

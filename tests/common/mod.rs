//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cvsift::{Algorithm, DocId, Document, Query, SearchConfig, SearchEngine, SearchResult};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small résumé corpus with known contents.
///
/// | id | notable content                                   |
/// |----|---------------------------------------------------|
/// | 1  | Python ×2, Django, PostgreSQL                     |
/// | 2  | Rust ×3, Kubernetes, distributed systems          |
/// | 3  | Java, Spring, "Pyhton" typo                       |
/// | 4  | accented "Résumé", C++, C#                        |
/// | 5  | unreadable                                        |
/// | 6  | "Kubernets" typo, machine lerning                 |
pub fn resume_corpus() -> Vec<Document> {
    vec![
        Document::new(
            1,
            "Jane Doe\nSenior Python Developer\n\nSkills: Python, Django, PostgreSQL\n",
        ),
        Document::new(
            2,
            "RUST engineer • distributed systems • Rust, Tokio, Kubernetes. Rust mentor.",
        ),
        Document::new(3, "Java / Spring Boot backend. Some Pyhton scripting."),
        Document::new(4, "Résumé of a C++ and C# developer (embedded, real-time)"),
        Document::unreadable(5),
        Document::new(6, "Kubernets operator, machine lerning pipelines, Go"),
    ]
}

/// Documents from plain strings, ids starting at 0.
pub fn docs(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Document::new(i as u64, *text))
        .collect()
}

// ============================================================================
// ENGINES
// ============================================================================

pub fn sequential_engine() -> SearchEngine {
    SearchEngine::new(SearchConfig {
        parallel: false,
        ..SearchConfig::default()
    })
    .expect("default config is valid")
}

pub fn exact_only_engine() -> SearchEngine {
    let mut config = SearchConfig::default();
    config.fuzzy.enabled = false;
    SearchEngine::new(config).expect("valid config")
}

// ============================================================================
// HELPERS
// ============================================================================

pub fn run(terms: &[&str], algorithm: Algorithm, corpus: &[Document]) -> Vec<SearchResult> {
    SearchEngine::default()
        .search(&Query::new(terms.iter().copied(), algorithm), corpus, None)
        .expect("search should succeed")
}

pub fn ids(results: &[SearchResult]) -> Vec<u64> {
    results.iter().map(|r| r.document_id.get()).collect()
}

pub fn result_for(results: &[SearchResult], id: u64) -> Option<&SearchResult> {
    results.iter().find(|r| r.document_id == DocId(id))
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

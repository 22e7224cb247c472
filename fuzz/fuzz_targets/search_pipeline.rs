// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole search calls on arbitrary text.
//!
//! Nothing a caller sends may panic: terms that normalize to nothing are
//! `InvalidQuery`, everything else returns a well-ordered result list whose
//! positions map back into the source text.

#![no_main]

use arbitrary::Arbitrary;
use cvsift::{Algorithm, Document, Query, SearchEngine};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PipelineInput {
    documents: Vec<Option<String>>,
    terms: Vec<String>,
    algorithm: u8,
    limit: Option<u8>,
}

fuzz_target!(|input: PipelineInput| {
    let corpus: Vec<Document> = input
        .documents
        .into_iter()
        .take(16)
        .enumerate()
        .map(|(id, text)| match text {
            Some(text) => Document::new(id as u64, text.chars().take(400).collect::<String>()),
            None => Document::unreadable(id as u64),
        })
        .collect();
    let terms: Vec<String> = input
        .terms
        .into_iter()
        .take(6)
        .map(|t| t.chars().take(24).collect())
        .collect();
    let algorithm = Algorithm::all()[usize::from(input.algorithm) % Algorithm::all().len()];
    let limit = input.limit.map(usize::from);

    let results = match SearchEngine::default().search(&Query::new(terms, algorithm), &corpus, limit) {
        Ok(results) => results,
        Err(e) => {
            assert!(e.is_invalid_query(), "unexpected error: {}", e);
            return;
        }
    };

    if let Some(limit) = limit {
        assert!(results.len() <= limit);
    }
    for pair in results.windows(2) {
        assert!(
            pair[0].total_score > pair[1].total_score
                || (pair[0].total_score == pair[1].total_score
                    && pair[0].document_id < pair[1].document_id)
        );
    }
    for result in &results {
        assert!(result.total_score > 0.0);
        let doc = &corpus[result.document_id.get() as usize];
        let source = doc.source_text().expect("only readable documents score");
        for evidence in &result.evidence {
            for &byte in &evidence.source_positions {
                assert!(source.is_char_boundary(byte) && byte < source.len());
            }
        }
    }
});

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cross-algorithm agreement.
//!
//! Prefix-function, bad-character and the automaton must report the same offsets
//! for every pattern, and those offsets must be real occurrences. Any divergence
//! means one of them skips or invents a match.

#![no_main]

use arbitrary::Arbitrary;
use cvsift::Algorithm;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct AgreementInput {
    text: String,
    patterns: Vec<String>,
}

fuzz_target!(|input: AgreementInput| {
    // Cap sizes to avoid timeouts.
    let text: Vec<char> = input.text.chars().take(500).collect();
    let patterns: Vec<Vec<char>> = input
        .patterns
        .iter()
        .take(8)
        .map(|p| p.chars().take(12).collect::<Vec<char>>())
        .filter(|p| !p.is_empty())
        .collect();
    if patterns.is_empty() {
        return;
    }

    let baseline = Algorithm::PrefixFunction
        .search(&text, &patterns)
        .expect("non-empty patterns compile");

    for (pattern, offsets) in patterns.iter().zip(&baseline) {
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        for &offset in offsets {
            assert_eq!(&text[offset..offset + pattern.len()], pattern.as_slice());
        }
    }

    for algorithm in [Algorithm::BadCharacter, Algorithm::MultiPatternAutomaton] {
        let found = algorithm.search(&text, &patterns).expect("non-empty patterns compile");
        assert_eq!(found, baseline, "{} disagrees", algorithm);
    }
});

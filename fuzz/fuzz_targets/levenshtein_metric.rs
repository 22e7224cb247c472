// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! Checks the metric axioms and that the bounded variant never disagrees with
//! the full computation. The fuzzy fallback trusts the bounded one blindly.

#![no_main]

use arbitrary::Arbitrary;
use cvsift::{bounded_levenshtein, levenshtein};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MetricInput {
    a: String,
    b: String,
    c: String,
    max: u8,
}

fn capped(s: &str) -> String {
    s.chars().take(40).collect()
}

fuzz_target!(|input: MetricInput| {
    let (a, b, c) = (capped(&input.a), capped(&input.b), capped(&input.c));

    let ab = levenshtein(&a, &b);
    let bc = levenshtein(&b, &c);
    let ac = levenshtein(&a, &c);

    assert_eq!(ab, levenshtein(&b, &a));
    assert_eq!(ab == 0, a == b);
    assert!(ac <= ab + bc);
    assert!(ab <= a.chars().count().max(b.chars().count()));

    let max = usize::from(input.max % 16);
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let bounded = bounded_levenshtein(&a_chars, &b_chars, max);
    assert_eq!(bounded, (ab <= max).then_some(ab));
});

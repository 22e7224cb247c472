//! Edit distance: metric properties and agreement with independent implementations.

use super::oracles::oracle_levenshtein;
use cvsift::{bounded_levenshtein, levenshtein, levenshtein_within, similarity};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dé]{0,10}").unwrap()
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_matches_dp_oracle(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), oracle_levenshtein(&a, &b));
    }

    #[test]
    fn prop_matches_strsim(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn prop_zero_iff_equal(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_triangle_inequality(a in word_strategy(), b in word_strategy(), c in word_strategy()) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    /// The bounded version agrees with the full one whenever the bound allows.
    #[test]
    fn prop_bounded_agrees(a in word_strategy(), b in word_strategy(), max in 0usize..6) {
        let full = levenshtein(&a, &b);
        let bounded = bounded_levenshtein(&chars(&a), &chars(&b), max);
        if full <= max {
            prop_assert_eq!(bounded, Some(full));
        } else {
            prop_assert_eq!(bounded, None);
        }
        prop_assert_eq!(levenshtein_within(&a, &b, max), full <= max);
    }

    #[test]
    fn prop_similarity_in_range(a in word_strategy(), b in word_strategy()) {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=100.0).contains(&s));
        prop_assert_eq!(s == 100.0, a == b);
    }
}

#[test]
fn kitten_sitting() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(oracle_levenshtein("kitten", "sitting"), 3);
    assert_eq!(bounded_levenshtein(&chars("kitten"), &chars("sitting"), 2), None);
}

#[test]
fn similarity_examples() {
    assert_eq!(similarity("", ""), 100.0);
    assert_eq!(similarity("abc", ""), 0.0);
    assert!((similarity("python", "pyton") - 100.0 * 5.0 / 6.0).abs() < 1e-9);
}

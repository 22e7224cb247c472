//! Differential tests: every exact matcher against the naive oracle.

use super::oracles::{oracle_failure_function, oracle_find_all};
use cvsift::matcher::failure_function;
use cvsift::{Algorithm, Automaton, BadCharMatcher};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabets make repeats and overlaps common, which is where matchers break.
fn text_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', ' ']), 0..80)
}

fn pattern_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c']), 1..6)
}

/// Mixed scripts so multi-byte and non-ASCII table lookups are exercised.
fn unicode_text_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'é', 'ß', '日', 'z', ' ']), 0..60)
}

fn unicode_pattern_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'é', 'ß', '日']), 1..4)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Each algorithm finds exactly the oracle's offsets for a single pattern.
    #[test]
    fn prop_single_pattern_matches_oracle(text in text_strategy(), pattern in pattern_strategy()) {
        let expected = oracle_find_all(&text, &pattern);
        for &algorithm in Algorithm::all() {
            let found = algorithm.search(&text, &[pattern.clone()]).unwrap();
            prop_assert_eq!(&found[0], &expected, "{}", algorithm);
        }
    }

    /// Same with non-ASCII characters.
    #[test]
    fn prop_unicode_matches_oracle(
        text in unicode_text_strategy(),
        pattern in unicode_pattern_strategy(),
    ) {
        let expected = oracle_find_all(&text, &pattern);
        for &algorithm in Algorithm::all() {
            let found = algorithm.search(&text, &[pattern.clone()]).unwrap();
            prop_assert_eq!(&found[0], &expected, "{}", algorithm);
        }
    }

    /// Many patterns at once, including duplicates and suffix/prefix relations.
    #[test]
    fn prop_multi_pattern_matches_oracle(
        text in text_strategy(),
        patterns in prop::collection::vec(pattern_strategy(), 1..6),
    ) {
        for &algorithm in Algorithm::all() {
            let found = algorithm.search(&text, &patterns).unwrap();
            prop_assert_eq!(found.len(), patterns.len());
            for (pattern, offsets) in patterns.iter().zip(&found) {
                prop_assert_eq!(offsets, &oracle_find_all(&text, pattern), "{}", algorithm);
            }
        }
    }

    /// Offsets are strictly ascending.
    #[test]
    fn prop_offsets_strictly_ascending(text in text_strategy(), pattern in pattern_strategy()) {
        for &algorithm in Algorithm::all() {
            let found = algorithm.search(&text, &[pattern.clone()]).unwrap();
            prop_assert!(found[0].windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// The failure function equals its definition.
    #[test]
    fn prop_failure_function_matches_definition(pattern in pattern_strategy()) {
        prop_assert_eq!(failure_function(&pattern), oracle_failure_function(&pattern));
    }

    /// Every bad-character shift makes progress.
    #[test]
    fn prop_bad_character_shift_positive(
        pattern in pattern_strategy(),
        c in prop::sample::select(vec!['a', 'b', 'c', 'x', '日']),
    ) {
        let matcher = BadCharMatcher::new(&pattern).unwrap();
        for j in 0..pattern.len() {
            prop_assert!(matcher.mismatch_shift(j, c) >= 1);
        }
    }

    /// A freshly built automaton always passes its structural check.
    #[test]
    fn prop_automaton_well_formed(patterns in prop::collection::vec(pattern_strategy(), 1..8)) {
        let automaton = Automaton::build(&patterns).unwrap();
        prop_assert!(automaton.verify().is_ok());
        prop_assert_eq!(automaton.pattern_count(), patterns.len());
    }
}

// ============================================================================
// FIXED EXAMPLES
// ============================================================================

#[test]
fn failure_function_worked_example() {
    let pattern: Vec<char> = "ababaca".chars().collect();
    assert_eq!(failure_function(&pattern), vec![0, 0, 1, 2, 3, 0, 1]);
    assert_eq!(oracle_failure_function(&pattern), vec![0, 0, 1, 2, 3, 0, 1]);
}

#[test]
fn empty_pattern_rejected_by_every_algorithm() {
    let text: Vec<char> = "abc".chars().collect();
    for &algorithm in Algorithm::all() {
        let err = algorithm.search(&text, &[Vec::<char>::new()]).unwrap_err();
        assert!(err.is_invalid_query(), "{}", algorithm);
    }
}

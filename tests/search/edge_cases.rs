//! Boundary inputs: empty things, unreadable things, invalid things.

use super::common::{docs, ids, resume_corpus, run, sequential_engine};
use cvsift::{Algorithm, CancelToken, Document, Query, SearchEngine, SearchError};

#[test]
fn empty_corpus_is_empty_result() {
    for &algorithm in Algorithm::all() {
        assert!(run(&["rust"], algorithm, &[]).is_empty());
    }
}

#[test]
fn empty_term_list_is_empty_result() {
    let query = Query::new(Vec::<String>::new(), Algorithm::BadCharacter);
    let results = SearchEngine::default()
        .search(&query, &resume_corpus(), None)
        .unwrap();
    assert!(results.is_empty());
    assert!(Query::parse(" , ,", Algorithm::BadCharacter).is_empty());
}

#[test]
fn blank_term_is_invalid_query() {
    let query = Query::new(["rust", "   "], Algorithm::PrefixFunction);
    let err = SearchEngine::default()
        .search(&query, &resume_corpus(), None)
        .unwrap_err();
    assert!(matches!(err, SearchError::InvalidQuery { .. }));
}

#[test]
fn term_of_only_symbols_is_invalid_query() {
    let query = Query::new(["★"], Algorithm::PrefixFunction);
    let err = SearchEngine::default().search(&query, &[], None).unwrap_err();
    assert!(err.is_invalid_query());
}

#[test]
fn unknown_algorithm_name_is_invalid_query() {
    let err = Query::parse_named("rust", "rabin-karp").unwrap_err();
    assert!(matches!(err, SearchError::UnknownAlgorithm(ref name) if name == "rabin-karp"));
    assert!(err.is_invalid_query());
}

#[test]
fn algorithm_aliases() {
    for (name, expected) in [
        ("kmp", Algorithm::PrefixFunction),
        ("Knuth_Morris_Pratt", Algorithm::PrefixFunction),
        ("BM", Algorithm::BadCharacter),
        ("boyer_moore", Algorithm::BadCharacter),
        ("aho-corasick", Algorithm::MultiPatternAutomaton),
        ("multi-pattern-automaton", Algorithm::MultiPatternAutomaton),
    ] {
        assert_eq!(name.parse::<Algorithm>().unwrap(), expected, "{}", name);
    }
}

#[test]
fn pattern_longer_than_text_is_no_match() {
    let corpus = docs(&["go"]);
    for &algorithm in Algorithm::all() {
        assert!(run(&["golang"], algorithm, &corpus).is_empty());
    }
}

#[test]
fn empty_and_unreadable_documents_score_zero() {
    let corpus = vec![
        Document::new(1, ""),
        Document::new(2, " \n\t "),
        Document::unreadable(3),
        Document::new(4, "rust"),
    ];
    let report = SearchEngine::default()
        .search_with_stats(&Query::new(["rust"], Algorithm::PrefixFunction), &corpus, None)
        .unwrap();
    assert_eq!(ids(&report.results), vec![4]);
    assert_eq!(report.stats.skipped, 1);
    assert_eq!(report.stats.scanned, 3);
}

#[test]
fn non_ascii_text_reports_char_offsets() {
    let corpus = docs(&["日本語 の rust と rust"]);
    let results = run(&["rust"], Algorithm::BadCharacter, &corpus);
    assert_eq!(results[0].evidence[0].positions, vec![6, 13]);

    let source = corpus[0].source_text().unwrap();
    for &byte in &results[0].evidence[0].source_positions {
        assert_eq!(&source[byte..byte + 4], "rust");
    }
}

#[test]
fn cancellation_before_start() {
    let token = CancelToken::new();
    token.cancel();
    let err = sequential_engine()
        .search_cancellable(
            &Query::new(["rust"], Algorithm::PrefixFunction),
            &resume_corpus(),
            None,
            &token,
        )
        .unwrap_err();
    assert!(matches!(err, SearchError::Cancelled { scanned: 0 }));
}

#[test]
fn uncancelled_token_changes_nothing() {
    let query = Query::new(["rust", "python"], Algorithm::PrefixFunction);
    let engine = SearchEngine::default();
    let plain = engine.search_with_stats(&query, &resume_corpus(), None).unwrap();
    let cancellable = engine
        .search_cancellable(&query, &resume_corpus(), None, &CancelToken::new())
        .unwrap();
    assert_eq!(plain.results, cancellable.results);
}

#[test]
fn invalid_query_fails_even_on_empty_corpus() {
    let query = Query::new([""], Algorithm::MultiPatternAutomaton);
    assert!(SearchEngine::default().search(&query, &[], None).is_err());
}

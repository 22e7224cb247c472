//! Ranking order, tie-breaks and limits.

use super::common::{docs, ids, run};
use cvsift::{Algorithm, Query, ScoringWeights, SearchConfig, SearchEngine};

#[test]
fn higher_score_ranks_first() {
    let corpus = docs(&["rust", "rust rust rust", "rust rust"]);
    let results = run(&["rust"], Algorithm::PrefixFunction, &corpus);
    assert_eq!(ids(&results), vec![1, 2, 0]);
    let scores: Vec<f64> = results.iter().map(|r| r.total_score).collect();
    assert_eq!(scores, vec![3.0, 2.0, 1.0]);
}

#[test]
fn ties_break_by_ascending_id() {
    let corpus = vec![
        cvsift::Document::new(30, "sql"),
        cvsift::Document::new(10, "sql"),
        cvsift::Document::new(20, "sql"),
    ];
    let results = run(&["sql"], Algorithm::BadCharacter, &corpus);
    assert_eq!(ids(&results), vec![10, 20, 30]);
}

#[test]
fn zero_score_documents_are_dropped() {
    let corpus = docs(&["rust", "nothing relevant here", ""]);
    let results = run(&["rust"], Algorithm::MultiPatternAutomaton, &corpus);
    assert_eq!(ids(&results), vec![0]);
}

#[test]
fn limit_keeps_the_top_of_the_ranking() {
    let corpus = docs(&["go", "go go go", "go go", "go go go go"]);
    let engine = SearchEngine::default();
    let query = Query::new(["go"], Algorithm::PrefixFunction);

    let all = engine.search(&query, &corpus, None).unwrap();
    assert_eq!(ids(&all), vec![3, 1, 2, 0]);

    for limit in 0..6 {
        let top = engine.search(&query, &corpus, Some(limit)).unwrap();
        assert_eq!(top.len(), limit.min(all.len()));
        assert_eq!(&all[..top.len()], &top[..]);
    }
}

#[test]
fn custom_weights_rescale_fuzzy_evidence() {
    // Doc 0: one exact "rust" + nothing. Doc 1: fuzzy "rost" + exact "sql" ×2.
    let corpus = docs(&["rust", "rost sql sql"]);
    let query = Query::new(["rust", "sql"], Algorithm::PrefixFunction);

    let default = SearchEngine::default().search(&query, &corpus, None).unwrap();
    assert_eq!(ids(&default), vec![1, 0]);

    let engine = SearchEngine::new(SearchConfig {
        weights: ScoringWeights {
            exact: 1.0,
            fuzzy: 0.1,
        },
        ..SearchConfig::default()
    })
    .unwrap();
    let results = engine.search(&query, &corpus, None).unwrap();
    assert!((results[0].total_score - (2.0 + 0.1 * 0.75)).abs() < 1e-9);
}

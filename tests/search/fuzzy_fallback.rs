//! Typo tolerance: the fuzzy fallback and when it does (not) run.

use super::common::{approx_eq, docs, exact_only_engine, ids, resume_corpus, result_for, run};
use cvsift::{Algorithm, MatchKind, Query, SearchConfig, SearchEngine};

#[test]
fn typo_in_document_still_matches() {
    let corpus = resume_corpus();
    let results = run(&["kubernetes"], Algorithm::PrefixFunction, &corpus);
    assert_eq!(ids(&results), vec![2, 6]);

    let doc6 = result_for(&results, 6).unwrap();
    let evidence = &doc6.evidence[0];
    assert_eq!(
        evidence.kind,
        MatchKind::Fuzzy {
            edit_distance: 1,
            matched_token: "kubernets".to_string()
        }
    );
    assert_eq!(evidence.positions, vec![0]);
    assert!(approx_eq(doc6.total_score, 0.5 * (1.0 - 1.0 / 10.0)));
}

#[test]
fn typo_in_query_still_matches() {
    let corpus = resume_corpus();
    let results = run(&["developr"], Algorithm::BadCharacter, &corpus);
    assert_eq!(ids(&results), vec![1, 4]);
    for result in &results {
        assert!(result.has_fuzzy_evidence());
        assert!(approx_eq(result.total_score, 0.5 * (1.0 - 1.0 / 8.0)));
    }
}

#[test]
fn multi_word_terms_match_token_windows() {
    let corpus = resume_corpus();
    let results = run(&["machine learning"], Algorithm::PrefixFunction, &corpus);
    let doc6 = result_for(&results, 6).unwrap();
    match &doc6.evidence[0].kind {
        MatchKind::Fuzzy {
            edit_distance,
            matched_token,
        } => {
            assert_eq!(*edit_distance, 1);
            assert_eq!(matched_token, "machine lerning");
        }
        other => panic!("expected fuzzy evidence, got {:?}", other),
    }
}

#[test]
fn fuzzy_skipped_when_an_exact_occurrence_exists() {
    // "rust" occurs exactly, so the near-miss "rost" must not add fuzzy evidence.
    let corpus = docs(&["rust rost rost"]);
    let report = SearchEngine::default()
        .search_with_stats(&Query::new(["rust"], Algorithm::BadCharacter), &corpus, None)
        .unwrap();
    assert_eq!(report.stats.fuzzy_invocations, 0);
    assert_eq!(report.results[0].evidence.len(), 1);
    assert_eq!(report.results[0].total_score, 1.0);
}

#[test]
fn one_fuzzy_hit_weighs_less_than_one_exact_occurrence() {
    let corpus = docs(&["golang rost", "golang rust"]);
    let results = run(&["rust"], Algorithm::PrefixFunction, &corpus);
    assert_eq!(ids(&results), vec![1, 0]);
    assert!(results[1].total_score < results[0].total_score);
}

#[test]
fn too_many_edits_do_not_match() {
    let corpus = resume_corpus();
    // "pyhton" is two edits from "python"; the budget for six letters is one.
    let results = run(&["python"], Algorithm::PrefixFunction, &corpus);
    assert_eq!(ids(&results), vec![1]);
}

#[test]
fn looser_threshold_admits_more() {
    let config: SearchConfig =
        SearchConfig::from_json_str(r#"{"fuzzy": {"threshold": {"max_edits": 2}}}"#).unwrap();
    let engine = SearchEngine::new(config).unwrap();
    let results = engine
        .search(&Query::new(["python"], Algorithm::PrefixFunction), &resume_corpus(), None)
        .unwrap();
    assert_eq!(ids(&results), vec![1, 3]);
    assert_eq!(results[1].evidence[0].edit_distance(), Some(2));
}

#[test]
fn disabled_fuzzy_is_exact_only() {
    let results = exact_only_engine()
        .search(&Query::new(["kubernetes"], Algorithm::PrefixFunction), &resume_corpus(), None)
        .unwrap();
    assert_eq!(ids(&results), vec![2]);
}

#[test]
fn short_terms_never_go_fuzzy() {
    let corpus = docs(&["ga gu gi"]);
    let report = SearchEngine::default()
        .search_with_stats(&Query::new(["go"], Algorithm::PrefixFunction), &corpus, None)
        .unwrap();
    assert!(report.results.is_empty());
    assert_eq!(report.stats.fuzzy_invocations, 1);
}

#[test]
fn similarity_threshold_follows_percentage() {
    let search = |percent: f64| {
        let json = format!(r#"{{"fuzzy": {{"threshold": {{"min_similarity": {}}}}}}}"#, percent);
        let engine = SearchEngine::new(SearchConfig::from_json_str(&json).unwrap()).unwrap();
        engine
            .search(&Query::new(["python"], Algorithm::PrefixFunction), &resume_corpus(), None)
            .unwrap()
    };
    // "pyhton" is 66.7% similar to "python".
    assert_eq!(ids(&search(70.0)), vec![1]);
    let looser = search(60.0);
    assert_eq!(ids(&looser), vec![1, 3]);
    assert_eq!(looser[1].evidence[0].edit_distance(), Some(2));
}

#[test]
fn multi_word_fuzzy_ignores_punctuation_between_words() {
    let results = run(&["machine learning"], Algorithm::PrefixFunction, &docs(&["machine - lerning ops"]));
    assert_eq!(ids(&results), vec![0]);
    let evidence = &results[0].evidence;
    assert_eq!(evidence.len(), 1);
    assert_eq!(
        evidence[0].kind,
        MatchKind::Fuzzy {
            edit_distance: 1,
            matched_token: "machine lerning".into(),
        }
    );
    assert!(approx_eq(results[0].total_score, 0.5 * (1.0 - 1.0 / 16.0)));
}

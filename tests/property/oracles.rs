//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations. Slow on purpose: they serve as
//! ground truth for the optimized matchers and the bounded edit distance.

#![allow(dead_code)]

/// Every start offset where `pattern` occurs in `text`, overlapping included.
///
/// O(n·m) window comparison.
pub fn oracle_find_all(text: &[char], pattern: &[char]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}

/// Failure function by definition: for each prefix, try every border length.
pub fn oracle_failure_function(pattern: &[char]) -> Vec<usize> {
    (0..pattern.len())
        .map(|i| {
            let prefix = &pattern[..=i];
            (0..prefix.len())
                .rev()
                .find(|&k| prefix[..k] == prefix[prefix.len() - k..])
                .unwrap_or(0)
        })
        .collect()
}

/// Classic Levenshtein edit distance via the full DP table.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }
    d[m][n]
}

/// Lowercase and collapse whitespace runs. Matches the engine's normalizer on
/// plain ASCII input without symbols.
pub fn oracle_normalize_ascii(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

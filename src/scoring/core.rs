// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a document's score.
//!
//! ```text
//! score(doc) = Σ_term ( exactWeight · occurrences
//!                     + fuzzyWeight · Σ_hit (1 - distance / len(term)) )
//! ```
//!
//! Every term contributes a non-negative amount, so the total never goes down when a
//! document gains an occurrence or a fuzzy hit. A fuzzy hit is worth at most
//! `fuzzyWeight · (1 - 1/len)`, which stays below one exact occurrence as long as
//! `fuzzyWeight <= exactWeight`. [`ScoringWeights::validate`] enforces that.
//!
//! # Defaults
//!
//! | Weight | Value | Why this value |
//! |--------|-------|----------------|
//! | exact  | 1.0   | One point per verbatim occurrence |
//! | fuzzy  | 0.5   | A one-typo hit on a 6-letter term ≈ 0.42 |

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Default weight of one exact occurrence.
pub const DEFAULT_EXACT_WEIGHT: f64 = 1.0;

/// Default weight of one fuzzy hit (before the distance penalty).
pub const DEFAULT_FUZZY_WEIGHT: f64 = 0.5;

/// Relative weights of exact and fuzzy evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub exact: f64,
    pub fuzzy: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact: DEFAULT_EXACT_WEIGHT,
            fuzzy: DEFAULT_FUZZY_WEIGHT,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<()> {
        if !self.exact.is_finite() || self.exact <= 0.0 {
            return Err(SearchError::config(format!(
                "exact weight must be positive and finite, got {}",
                self.exact
            )));
        }
        if !self.fuzzy.is_finite() || self.fuzzy <= 0.0 {
            return Err(SearchError::config(format!(
                "fuzzy weight must be positive and finite, got {}",
                self.fuzzy
            )));
        }
        if self.fuzzy > self.exact {
            return Err(SearchError::config(format!(
                "fuzzy weight {} exceeds exact weight {}",
                self.fuzzy, self.exact
            )));
        }
        Ok(())
    }

    /// Contribution of `occurrences` exact matches of one term.
    pub fn exact_score(&self, occurrences: usize) -> f64 {
        self.exact * occurrences as f64
    }

    /// Contribution of one fuzzy hit at `distance` for a term of `term_len` chars.
    pub fn fuzzy_score(&self, distance: usize, term_len: usize) -> f64 {
        if term_len == 0 || distance >= term_len {
            return 0.0;
        }
        self.fuzzy * (1.0 - distance as f64 / term_len as f64)
    }
}

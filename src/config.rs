// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! {
//!   "weights": { "exact": 1.0, "fuzzy": 0.5 },
//!   "fuzzy": { "enabled": true, "threshold": { "fraction": 0.3 }, "min_token_len": 3, "max_tokens": 20000 },
//!   "normalizer": { "strip_diacritics": true, "strip_symbols": true },
//!   "batch_multi_term": true,
//!   "parallel": true
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::fuzzy::{FuzzyOptions, FuzzyThreshold};
use crate::normalize::NormalizerOptions;
use crate::scoring::ScoringWeights;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub weights: ScoringWeights,
    pub fuzzy: FuzzyOptions,
    pub normalizer: NormalizerOptions,
    /// Use the multi-pattern automaton whenever a query has more than one distinct
    /// term, whatever algorithm was requested.
    pub batch_multi_term: bool,
    /// Score documents on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            fuzzy: FuzzyOptions::default(),
            normalizer: NormalizerOptions::default(),
            batch_multi_term: true,
            parallel: true,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        match self.fuzzy.threshold {
            FuzzyThreshold::Fraction(fraction) if !(fraction > 0.0 && fraction < 1.0) => {
                return Err(SearchError::config(format!(
                    "fuzzy threshold fraction must be in (0, 1), got {}",
                    fraction
                )));
            }
            FuzzyThreshold::MinSimilarity(percent) if !(percent > 0.0 && percent < 100.0) => {
                return Err(SearchError::config(format!(
                    "fuzzy threshold similarity must be in (0, 100), got {}",
                    percent
                )));
            }
            _ => {}
        }
        if self.fuzzy.min_token_len == 0 {
            return Err(SearchError::config("fuzzy min_token_len must be at least 1"));
        }
        if self.fuzzy.max_tokens == 0 {
            return Err(SearchError::config("fuzzy max_tokens must be at least 1"));
        }

        Ok(())
    }
}

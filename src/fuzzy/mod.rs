// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Two layers here: plain and bounded Levenshtein for one-off comparisons, and a
//! token scanner that runs the bounded version over a document's tokens for a
//! term that found no exact occurrence.

mod levenshtein;
mod matcher;

pub use levenshtein::*;
pub use matcher::*;

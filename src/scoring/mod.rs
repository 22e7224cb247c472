// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Exact occurrences carry full weight; fuzzy hits carry a reduced weight scaled by
//! how close they were. Ranking is a plain descending sort with the document id as
//! the final word, so identical inputs always produce identical output.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_results, rank};

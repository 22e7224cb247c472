// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization with a position map back to the source.
//!
//! Documents and query terms both go through the same [`Normalizer`], so every
//! comparison downstream is case-insensitive and whitespace-agnostic:
//!
//! - "Senior  Rust\nEngineer" → "senior rust engineer"
//! - "Résumé" → "resume" (with diacritic folding)
//! - "C++ • Go" → "c++ go" (with symbol stripping)
//!
//! Matchers report offsets into the normalized character sequence. Those are useless
//! to a caller holding the original extracted text, so every normalized character
//! remembers the byte offset of the source character it came from.

use serde::{Deserialize, Serialize};

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Punctuation that survives symbol stripping. Résumés are full of `c++`, `c#`,
/// `node.js`, `ci/cd` and e-mail addresses.
const KEPT_PUNCTUATION: &[char] = &[
    '-', '.', ',', ';', ':', '(', ')', '@', '/', '\\', '+', '#',
];

/// Knobs for [`Normalizer`]. Lowercasing and whitespace collapsing always happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
    /// Fold accented letters onto their base letter ("é" → "e").
    pub strip_diacritics: bool,
    /// Replace bullets, emoji and other symbols with whitespace.
    pub strip_symbols: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            strip_diacritics: true,
            strip_symbols: true,
        }
    }
}

/// Normalized text plus the map from normalized char index to source byte offset.
///
/// Invariant: `chars.len() == source_offsets.len()` and `source_offsets` is
/// non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    text: String,
    chars: Vec<char>,
    source_offsets: Vec<usize>,
}

impl NormalizedText {
    /// The normalized string.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The normalized text as Unicode scalars. Matchers work on this.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Byte offset in the source text for a normalized character offset.
    pub fn source_offset(&self, offset: usize) -> Option<usize> {
        self.source_offsets.get(offset).copied()
    }

    /// Map ascending normalized offsets to ascending, duplicate-free source offsets.
    ///
    /// One source character can expand to several normalized characters, so two
    /// distinct normalized offsets may land on the same source byte.
    pub fn map_to_source(&self, offsets: &[usize]) -> Vec<usize> {
        let mut mapped: Vec<usize> = offsets
            .iter()
            .filter_map(|&offset| self.source_offset(offset))
            .collect();
        mapped.dedup();
        mapped
    }
}

/// Case-folds and whitespace-normalizes text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    options: NormalizerOptions,
}

impl Normalizer {
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> NormalizerOptions {
        self.options
    }

    /// Normalize `source`, keeping the position map.
    pub fn normalize(&self, source: &str) -> NormalizedText {
        let mut chars = Vec::with_capacity(source.len());
        let mut source_offsets = Vec::with_capacity(source.len());
        // Byte offset of the first separator in the current run, if any.
        let mut pending_space: Option<usize> = None;

        for (byte_offset, c) in source.char_indices() {
            if is_combining_mark(c) {
                if self.options.strip_diacritics {
                    continue;
                }
            } else if self.is_separator(c) {
                pending_space.get_or_insert(byte_offset);
                continue;
            }

            if let Some(space_offset) = pending_space.take() {
                if !chars.is_empty() {
                    chars.push(' ');
                    source_offsets.push(space_offset);
                }
            }

            for folded in self.fold(c) {
                chars.push(folded);
                source_offsets.push(byte_offset);
            }
        }

        NormalizedText {
            text: chars.iter().collect(),
            chars,
            source_offsets,
        }
    }

    /// Normalize a query term. Same rules as documents, map discarded.
    pub fn normalize_term(&self, term: &str) -> String {
        self.normalize(term).text
    }

    fn is_separator(&self, c: char) -> bool {
        if c.is_whitespace() {
            return true;
        }
        self.options.strip_symbols && !c.is_alphanumeric() && !KEPT_PUNCTUATION.contains(&c)
    }

    #[cfg(feature = "unicode-normalization")]
    fn fold(&self, c: char) -> Vec<char> {
        if self.options.strip_diacritics {
            c.nfd()
                .filter(|d| !is_combining_mark(*d))
                .flat_map(char::to_lowercase)
                .collect()
        } else {
            c.to_lowercase().collect()
        }
    }

    /// Without unicode-normalization only already-decomposed marks are dropped.
    #[cfg(not(feature = "unicode-normalization"))]
    fn fold(&self, c: char) -> Vec<char> {
        let strip = self.options.strip_diacritics;
        c.to_lowercase()
            .filter(|d| !(strip && is_combining_mark(*d)))
            .collect()
    }
}

/// Normalize with default options. Convenience for tests and one-off comparisons.
pub fn normalize(value: &str) -> String {
    Normalizer::default().normalize_term(value)
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

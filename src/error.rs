// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the matching core.
//!
//! Query problems surface before any document is scanned. A violated automaton or
//! offset invariant is an `InternalInconsistency` and means there is a bug here, not
//! in the caller's input. Per-document trouble never shows up as an error at all: the
//! document scores zero and the batch continues.

use std::io;

use thiserror::Error;

/// Everything that can go wrong in a search call (and in loading its configuration).
#[derive(Error, Debug)]
pub enum SearchError {
    /// The query cannot be executed as given (empty pattern, zero limit misuse, ...).
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    /// The caller named an algorithm we don't implement.
    #[error("invalid query: unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// An internal invariant was violated. Never expected in correct code.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),

    /// Cooperative cancellation was observed at a document boundary.
    #[error("search cancelled after {scanned} documents")]
    Cancelled { scanned: usize },

    /// Configuration failed validation.
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Create an `InvalidQuery` error.
    pub fn invalid_query<S: Into<String>>(reason: S) -> Self {
        SearchError::InvalidQuery {
            reason: reason.into(),
        }
    }

    /// Create an `InternalInconsistency` error.
    pub fn inconsistency<S: Into<String>>(msg: S) -> Self {
        SearchError::InternalInconsistency(msg.into())
    }

    /// Create a `Config` error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SearchError::Config(msg.into())
    }

    /// True for the query-rejection class (`InvalidQuery` and `UnknownAlgorithm`).
    pub fn is_invalid_query(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidQuery { .. } | SearchError::UnknownAlgorithm(_)
        )
    }

    /// Stable snake_case name of the error class, for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::InvalidQuery { .. } | SearchError::UnknownAlgorithm(_) => "invalid_query",
            SearchError::InternalInconsistency(_) => "internal_inconsistency",
            SearchError::Cancelled { .. } => "cancelled",
            SearchError::Config(_) => "config",
            SearchError::Io(_) => "io",
            SearchError::Json(_) => "json",
        }
    }
}

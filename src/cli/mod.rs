// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cvsift command-line interface.
//!
//! Three subcommands: `search` ranks a JSON corpus file against a keyword list,
//! `request` answers a JSON search request (the service-shaped entry point, stdin
//! to stdout), and `algorithms` lists the exact-matching strategies.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use cvsift::{Algorithm, DocId, Document, Query, SearchEngine, SearchError, SearchReport};

#[derive(Parser)]
#[command(
    name = "cvsift",
    about = "Keyword search over extracted résumé text: exact matching with typo-tolerant fallback",
    version
)]
pub struct Cli {
    /// Engine configuration (JSON). Defaults apply to missing fields.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// More logging on stderr (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the documents of a corpus file against a keyword list
    Search {
        /// Corpus file: a JSON array of {"id": number, "text": string | null}
        corpus: PathBuf,

        /// Comma-separated keywords, e.g. "rust, distributed systems, sql"
        keywords: String,

        /// Exact-matching algorithm (prefix-function, bad-character,
        /// multi-pattern-automaton, or an alias such as kmp, bm, ac)
        #[arg(short, long, default_value = "prefix-function")]
        algorithm: String,

        /// Maximum number of results (all qualifying documents when omitted)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the JSON report instead of the table
        #[arg(long)]
        json: bool,

        /// Show counters and phase timings
        #[arg(long)]
        stats: bool,
    },

    /// Answer a JSON search request and print the JSON response
    Request {
        /// Request file, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },

    /// List supported exact-matching algorithms
    Algorithms,
}

/// One corpus entry as it appears on disk or on the wire. `text: null` marks a
/// document the extraction layer could not read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub id: DocId,
    #[serde(default)]
    pub text: Option<String>,
}

impl CorpusEntry {
    pub fn into_document(self, engine: &SearchEngine) -> Document {
        match self.text {
            Some(text) => engine.document(self.id, text),
            None => Document::unreadable(self.id),
        }
    }
}

/// Query as sent on the wire. The algorithm stays a plain string until the
/// request is answered, so an unknown name is an invalid query rather than a
/// malformed body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestQuery {
    pub terms: Vec<String>,
    pub algorithm: String,
}

impl RequestQuery {
    pub fn into_query(self) -> cvsift::Result<Query> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        Ok(Query::new(self.terms, algorithm))
    }
}

/// Request body for `cvsift request`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: RequestQuery,
    pub documents: Vec<CorpusEntry>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response body for `cvsift request`. Errors are reported in-band so a caller
/// always gets JSON back.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchResponse {
    Ok(SearchReport),
    Error { kind: &'static str, message: String },
}

/// Every failure past reading the input becomes an in-band error response.
pub fn answer(engine: &SearchEngine, body: &str) -> SearchResponse {
    let outcome = serde_json::from_str::<SearchRequest>(body)
        .map_err(SearchError::from)
        .and_then(|request| {
            let query = request.query.into_query()?;
            let documents: Vec<Document> = request
                .documents
                .into_iter()
                .map(|entry| entry.into_document(engine))
                .collect();
            engine.search_with_stats(&query, &documents, request.limit)
        });

    match outcome {
        Ok(report) => SearchResponse::Ok(report),
        Err(e) => SearchResponse::Error {
            kind: e.kind(),
            message: e.to_string(),
        },
    }
}

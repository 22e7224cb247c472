// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use cvsift::{list_supported_algorithms, Document, Query, SearchConfig, SearchEngine};

mod cli;
use cli::{Cli, Commands, CorpusEntry};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Human-readable logs on stderr; stdout stays clean for results.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "warn,cvsift=debug",
        _ => "info,cvsift=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> cvsift::Result<()> {
    let engine = build_engine(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            corpus,
            keywords,
            algorithm,
            limit,
            json,
            stats,
        } => {
            let query = Query::parse_named(&keywords, &algorithm)?;
            let corpus = load_corpus(&corpus, &engine)?;
            let report = engine.search_with_stats(&query, &corpus, limit)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                cli::display::print_report(&report, stats);
            }
        }
        Commands::Request { input, pretty } => {
            let body = read_input(&input)?;
            let response = cli::answer(&engine, &body);
            let out = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{}", out);
        }
        Commands::Algorithms => {
            for name in list_supported_algorithms() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn build_engine(config: Option<&Path>) -> cvsift::Result<SearchEngine> {
    let config = match config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            SearchConfig::load(path)?
        }
        None => SearchConfig::default(),
    };
    SearchEngine::new(config)
}

fn load_corpus(path: &Path, engine: &SearchEngine) -> cvsift::Result<Vec<Document>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<CorpusEntry> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), documents = entries.len(), "corpus loaded");
    Ok(entries
        .into_iter()
        .map(|entry| entry.into_document(engine))
        .collect())
}

fn read_input(input: &str) -> cvsift::Result<String> {
    if input == "-" {
        let mut body = String::new();
        io::stdin().read_to_string(&mut body)?;
        Ok(body)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

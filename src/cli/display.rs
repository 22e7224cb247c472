// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for `cvsift search`.
//!
//! OneDark colors on a TTY, plain text everywhere else (pipes, `NO_COLOR`). Results
//! go in one box per document: score, coverage, then one line per evidence entry.

use std::io::IsTerminal;
use std::sync::OnceLock;
use std::time::Duration;

use cvsift::{MatchEvidence, MatchKind, SearchReport, SearchResult};

/// Width between │ and │, borders excluded.
pub const BOX_WIDTH: usize = 80;

/// Evidence positions shown before eliding the rest.
const MAX_POSITIONS: usize = 8;

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

macro_rules! palette_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(onedark::$name)
        }
    };
}

palette_color!(RED);
palette_color!(GREEN);
palette_color!(YELLOW);
palette_color!(BLUE);
palette_color!(MAGENTA);
palette_color!(CYAN);
palette_color!(GRAY);

static COLORS: OnceLock<bool> = OnceLock::new();

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    *COLORS.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal())
}

/// Apply a palette color with optional modifiers, or nothing when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ANSI escapes excluded.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{b}│{r}{}{}{b}│{r}",
        content,
        " ".repeat(pad),
        b = border(),
        r = reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}┌{r}{}{b}{}┐{r}",
        label_part,
        "─".repeat(remaining),
        b = border(),
        r = reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `[exact]` in green, `[fuzzy]` in magenta.
pub fn match_badge(evidence: &MatchEvidence) -> String {
    match evidence.kind {
        MatchKind::Exact { .. } => themed(GREEN, &[BOLD], "[exact]"),
        MatchKind::Fuzzy { .. } => themed(MAGENTA, &[BOLD], "[fuzzy]"),
    }
}

/// Score colored by how strong it is relative to the best result.
pub fn score_value(score: f64, best: f64) -> String {
    let text = format!("{:>7.2}", score);
    let ratio = if best > 0.0 { score / best } else { 0.0 };
    if ratio >= 0.75 {
        themed(GREEN, &[BOLD], &text)
    } else if ratio >= 0.4 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Milliseconds, colored green / yellow / red.
pub fn timing_ms(elapsed: Duration) -> String {
    let ms = elapsed.as_secs_f64() * 1000.0;
    let text = format!("{:>9.3} ms", ms);
    if ms < 5.0 {
        themed(GREEN, &[], &text)
    } else if ms < 50.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(RED, &[], &text)
    }
}

/// Positions list, elided past a handful.
pub fn positions(positions: &[usize]) -> String {
    let shown: Vec<String> = positions
        .iter()
        .take(MAX_POSITIONS)
        .map(usize::to_string)
        .collect();
    if positions.len() > MAX_POSITIONS {
        format!("{}, … (+{})", shown.join(", "), positions.len() - MAX_POSITIONS)
    } else {
        shown.join(", ")
    }
}

fn evidence_line(evidence: &MatchEvidence) -> String {
    let detail = match &evidence.kind {
        MatchKind::Exact { occurrences } => format!("{}×", occurrences),
        MatchKind::Fuzzy {
            edit_distance,
            matched_token,
        } => format!("≈ {:?} (d={})", matched_token, edit_distance),
    };
    format!(
        "   {} {} {}  {}",
        match_badge(evidence),
        themed(BLUE, &[], &evidence.term),
        detail,
        themed(GRAY, &[DIM], &format!("@ {}", positions(&evidence.source_positions)))
    )
}

fn result_box(rank: usize, result: &SearchResult, best: f64) {
    section_top(&format!("#{} document {}", rank, result.document_id));
    row(&format!(
        " score {}   coverage {:>5.1}%   terms: {}",
        score_value(result.total_score, best),
        result.coverage * 100.0,
        result.matched_terms().join(", ")
    ));
    for evidence in &result.evidence {
        row(&evidence_line(evidence));
    }
    section_bot();
}

/// Render a whole report: one box per result, then the statistics.
pub fn print_report(report: &SearchReport, show_stats: bool) {
    if report.results.is_empty() {
        println!("{}", themed(YELLOW, &[], "No matching documents."));
    }

    let best = report.results.first().map_or(0.0, |r| r.total_score);
    for (i, result) in report.results.iter().enumerate() {
        result_box(i + 1, result, best);
    }

    if show_stats {
        let stats = &report.stats;
        section_top("STATS");
        row(&format!(
            " algorithm        {}",
            stats.algorithm.map_or("-", |a| a.name())
        ));
        row(&format!(
            " documents        {} scanned, {} skipped, {} total",
            stats.scanned, stats.skipped, stats.documents
        ));
        row(&format!(
            " qualifying       {} ({} shown)",
            stats.qualifying,
            report.results.len()
        ));
        row(&format!(" fuzzy fallbacks  {}", stats.fuzzy_invocations));
        row(&format!(" exact phase    {}", timing_ms(stats.exact_time)));
        row(&format!(" fuzzy phase    {}", timing_ms(stats.fuzzy_time)));
        section_bot();
    }
}

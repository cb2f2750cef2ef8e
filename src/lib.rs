#![forbid(unsafe_code)]
//! # Question Analysis
//!
//! Derives structured analytic summaries from a corpus of free-text question
//! strings: an entity co-occurrence network, ranked frequency tables for
//! named entities and domain terms, a mutually exclusive rule-based
//! categorization, a binary numeric-content split, and a word-count
//! histogram with descriptive statistics.
//!
//! Every result is a pure, deterministic function of (corpus, vocabulary,
//! rule table), computed fresh from an immutable corpus snapshot. The five
//! aggregations share only a single case-folded copy of each record and run
//! on private accumulators, so they execute in parallel without locks.
//!
//! ## Example
//! ```
//! use question_analysis::{AnalysisOptions, Vocabularies, analyze_records};
//!
//! let records: Vec<String> = ["Who will win, India or England?", "How to bowl a yorker"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let vocabs = Vocabularies::cricket().unwrap();
//! let report = analyze_records(&records, &vocabs, &AnalysisOptions::default());
//! assert_eq!(report.total_records, 2);
//! assert_eq!(report.network.nodes.len(), 2); // India, England
//! ```

use rayon::prelude::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

mod classify;
mod cooccurrence;
mod defaults;
mod error;
mod export;
mod frequency;
mod length;
mod loader;
mod numeric;
mod vocab;

pub use classify::{
    CategoryBreakdown, CategoryCount, FALLBACK_LABEL, RULES, Rule, classify, classify_with,
};
pub use cooccurrence::{CoOccurrence, Link, Network, Node};
pub use defaults::{PLAYERS, TEAMS, TERMS, Vocabularies};
pub use error::AnalysisError;
pub use export::{ExportFormat, csv_safe_cell, export_report};
pub use frequency::{CountMode, FrequencyTable, RankedItem};
pub use length::{DEFAULT_BINS, HistogramBin, LengthStats, word_count};
pub use loader::load_questions;
pub use numeric::{NumericSplit, has_digit};
pub use vocab::{MatchMode, Vocabulary};

/// Tuning knobs for one analysis run.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Truncation for the ranked mention table and the summary listings.
    /// `None` keeps every nonzero item.
    pub top_k: Option<usize>,
    /// Number of histogram bins for the length distribution.
    pub bins: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_k: Some(15),
            bins: DEFAULT_BINS,
        }
    }
}

/// The full result set of one run, one structure per aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub total_records: usize,
    /// Entity co-occurrence network (nonzero nodes, deduplicated links).
    pub network: Network,
    /// Presence-ranked entity mentions, truncated to top-K.
    pub mentions: Vec<RankedItem>,
    /// Occurrence-ranked domain terms (untruncated).
    pub terms: Vec<RankedItem>,
    /// Category counts and percentages in fixed rule order.
    pub categories: CategoryBreakdown,
    /// Records with vs. without digits.
    pub numeric: NumericSplit,
    /// Word-count histogram with mean/median.
    pub lengths: LengthStats,
}

/// Run all five aggregations over an already-materialized corpus.
///
/// Case-folds each record once up front; the substring and whole-word
/// matchers, and the classifier, all reuse that copy. The aggregations have
/// no data dependency on one another and run under nested `rayon::join`.
pub fn analyze_records(
    records: &[String],
    vocabs: &Vocabularies,
    opts: &AnalysisOptions,
) -> AnalysisReport {
    let lowered: Vec<String> = records.par_iter().map(|r| r.to_lowercase()).collect();

    let (((network, mentions), (terms, categories)), (numeric, lengths)) = rayon::join(
        || {
            rayon::join(
                || {
                    rayon::join(
                        || CoOccurrence::from_records(&vocabs.network, &lowered).network(),
                        || {
                            FrequencyTable::from_records(
                                &vocabs.mentions,
                                &lowered,
                                CountMode::Presence,
                            )
                            .ranked(opts.top_k)
                        },
                    )
                },
                || {
                    rayon::join(
                        || {
                            FrequencyTable::from_records(
                                &vocabs.terms,
                                &lowered,
                                CountMode::Occurrences,
                            )
                            .ranked(None)
                        },
                        || CategoryBreakdown::from_records(&lowered),
                    )
                },
            )
        },
        || {
            rayon::join(
                || NumericSplit::from_records(records),
                || LengthStats::from_records(records, opts.bins),
            )
        },
    );

    AnalysisReport {
        total_records: records.len(),
        network,
        mentions,
        terms,
        categories,
        numeric,
        lengths,
    }
}

/// Load a CSV corpus and analyze it in one call. A load failure is returned
/// before any aggregation runs.
pub fn analyze_csv(
    path: &Path,
    question_field: &str,
    vocabs: &Vocabularies,
    opts: &AnalysisOptions,
) -> Result<AnalysisReport, AnalysisError> {
    let records = load_questions(path, question_field)?;
    Ok(analyze_records(&records, vocabs, opts))
}

/// Render the human-readable summary printed by the CLI (and written by the
/// txt export). Mean/median are rounded to one decimal for display only.
pub fn render_summary(report: &AnalysisReport, top_k: Option<usize>) -> String {
    let cap = top_k.unwrap_or(usize::MAX);
    let mut out = String::new();

    let _ = writeln!(out, "Question corpus: {} records", report.total_records);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Co-occurrence network: {} entities, {} pairs",
        report.network.nodes.len(),
        report.network.links.len()
    );
    for node in &report.network.nodes {
        let _ = writeln!(out, "  {}\t{}", node.id, node.count);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Top {} mentions:", report.mentions.len());
    for row in &report.mentions {
        let _ = writeln!(out, "  {}\t{}", row.item, row.count);
    }
    let _ = writeln!(out);

    let shown = report.terms.len().min(cap);
    let _ = writeln!(out, "Top {shown} terms:");
    for row in report.terms.iter().take(cap) {
        let _ = writeln!(out, "  {}\t{}", row.item, row.count);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Question categories:");
    for cat in &report.categories.categories {
        let _ = writeln!(out, "  {}\t{}\t{:.2}%", cat.label, cat.count, cat.percentage);
    }
    let _ = writeln!(out);

    let total = report.numeric.total().max(1);
    let _ = writeln!(out, "Numeric content:");
    let _ = writeln!(
        out,
        "  With Numbers/Statistics\t{}\t{:.1}%",
        report.numeric.with_numbers,
        report.numeric.with_numbers as f64 / total as f64 * 100.0
    );
    let _ = writeln!(
        out,
        "  Without Numbers\t{}\t{:.1}%",
        report.numeric.without_numbers,
        report.numeric.without_numbers as f64 / total as f64 * 100.0
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Question length: mean {:.1} words, median {:.1} words (max {})",
        report.lengths.mean, report.lengths.median, report.lengths.max_words
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    // The known-corpus scenario: every aggregation's expected output in one run.
    #[test]
    fn known_corpus_scenario() {
        let corpus = records(&[
            "India beat England today",
            "Who will win the match?",
            "Translate this to French",
            "",
        ]);
        let vocabs = Vocabularies::cricket().unwrap();
        let report = analyze_records(&corpus, &vocabs, &AnalysisOptions::default());

        assert_eq!(report.total_records, 4);

        // Network: India and England once each, co-occurring once.
        assert_eq!(
            report.network.nodes,
            vec![
                Node {
                    id: "India".into(),
                    count: 1
                },
                Node {
                    id: "England".into(),
                    count: 1
                },
            ]
        );
        assert_eq!(report.network.links.len(), 1);
        assert_eq!(report.network.links[0].weight, 1);

        // Categories: Factual 1, Translation 1, Other 2; counts sum to corpus.
        assert_eq!(report.categories.count("Factual/Who-What-When"), 1);
        assert_eq!(report.categories.count("Translation"), 1);
        assert_eq!(report.categories.count("Other"), 2);
        assert_eq!(report.categories.total(), 4);

        // Numeric split.
        assert_eq!(report.numeric.with_numbers, 0);
        assert_eq!(report.numeric.without_numbers, 4);

        // Term table: "match" appears once as a whole word.
        assert!(
            report
                .terms
                .iter()
                .any(|r| r.item == "match" && r.count == 1)
        );

        // Lengths: word counts [4, 5, 4, 0].
        assert_eq!(report.lengths.total(), 4);
        assert_eq!(report.lengths.mean, 3.25);
        assert_eq!(report.lengths.median, 4.0);
    }

    #[test]
    fn empty_corpus_yields_zeroes_everywhere() {
        let vocabs = Vocabularies::cricket().unwrap();
        let report = analyze_records(&[], &vocabs, &AnalysisOptions::default());

        assert_eq!(report.total_records, 0);
        assert!(report.network.nodes.is_empty());
        assert!(report.mentions.is_empty());
        assert!(report.terms.is_empty());
        assert_eq!(report.categories.total(), 0);
        assert_eq!(report.numeric.total(), 0);
        assert_eq!(report.lengths.total(), 0);
        assert_eq!(report.lengths.mean, 0.0);
        assert_eq!(report.lengths.median, 0.0);

        // The summary must render without panicking on the empty corpus.
        let summary = render_summary(&report, Some(15));
        assert!(summary.contains("0 records"));
    }

    #[test]
    fn summary_lists_expected_sections() {
        let corpus = records(&["Who will win the match between India and England in 2023?"]);
        let vocabs = Vocabularies::cricket().unwrap();
        let report = analyze_records(&corpus, &vocabs, &AnalysisOptions::default());
        let summary = render_summary(&report, Some(15));

        assert!(summary.contains("Co-occurrence network: 2 entities, 1 pairs"));
        assert!(summary.contains("Question categories:"));
        assert!(summary.contains("With Numbers/Statistics\t1"));
        assert!(summary.contains("Question length:"));
    }
}

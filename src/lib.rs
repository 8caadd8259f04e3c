//! Workspace umbrella crate for plagscan.
//!
//! This crate stitches together tokenization, bigram similarity, corpus
//! ranking and highlighting so callers can check a text with a single entry
//! point:
//!
//! ```rust
//! use plagscan::{analyze, REFERENCE_TEXTS};
//!
//! let result = analyze(REFERENCE_TEXTS[0]);
//! assert_eq!(result.plagiarism_score, 100);
//! assert_eq!(result.matched_sources[0].id, 0);
//! assert!(result.is_flagged());
//! ```
//!
//! [`analyze`] runs against the built-in reference corpus with default
//! thresholds. Build an [`Analyzer`] for custom thresholds or a custom corpus.

pub use canonical::{SUFFIX_RULES, Token, join_tokens, stem, stem_all, tokenize, tokens};
pub use highlight::{
    DEFAULT_HIGHLIGHT_THRESHOLD, HIGHLIGHT_END, HIGHLIGHT_START, Segment, build_highlighted_text,
    build_highlighted_text_with_threshold, parse_markers, plain_text,
};
pub use matcher::{
    MatchError, REFERENCE_TEXTS, ReferenceCorpus, ScoringProgress, SourceMatch, rank_against_corpus,
    rank_with_progress,
};
pub use similarity::{BigramProfile, BigramSet, similarity};

mod analyzer;
pub mod config;
mod metrics;

pub use crate::analyzer::{AnalysisConfig, AnalysisError, AnalysisResult, Analyzer};
pub use crate::config::{ConfigLoadError, LoggingConfig, PlagscanConfig};
pub use crate::metrics::{AnalysisMetrics, set_analysis_metrics};

use once_cell::sync::Lazy;

static DEFAULT_ANALYZER: Lazy<Analyzer> = Lazy::new(Analyzer::builtin);

/// Analyze `text` against the built-in corpus with default thresholds.
///
/// Total for any string input; empty or whitespace-only text yields a zero
/// score, an empty highlighted text and no sources.
pub fn analyze(text: &str) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(text)
}

/// [`analyze`], reporting progress after each reference passage is scored.
pub fn analyze_with_progress<F>(text: &str, on_progress: F) -> AnalysisResult
where
    F: FnMut(ScoringProgress),
{
    DEFAULT_ANALYZER.analyze_with_progress(text, on_progress)
}

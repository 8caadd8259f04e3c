use std::sync::Arc;

use highlight::{Segment, build_highlighted_text_with_threshold, parse_markers};
use matcher::{
    MatchError, ReferenceCorpus, ScoringProgress, SourceMatch, rank_with_progress, to_percent,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::metrics::MetricsSpan;

/// Errors raised while building an [`Analyzer`]. Analysis itself never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("invalid analysis config: {0}")]
    InvalidConfig(String),
    #[error("corpus error: {0}")]
    Match(#[from] MatchError),
}

/// Thresholds used by the orchestrator.
///
/// `source_threshold` decides which sources are listed and
/// `highlight_threshold` which sources drive highlighting. The two are
/// independent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Configuration schema version.
    pub version: u32,
    /// Sources scoring strictly above this drive token highlighting.
    pub highlight_threshold: f64,
    /// Sources scoring strictly above this are returned in `matched_sources`.
    pub source_threshold: f64,
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.version == 0 {
            return Err(AnalysisError::InvalidConfig("version must be >= 1".into()));
        }
        for (name, value) in [
            ("highlight_threshold", self.highlight_threshold),
            ("source_threshold", self.source_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "{name} must be between 0.0 and 1.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            version: 1,
            highlight_threshold: highlight::DEFAULT_HIGHLIGHT_THRESHOLD,
            source_threshold: 0.1,
        }
    }
}

/// Outcome of one analysis, owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// `round(best score * 100)`; driven by the single best source.
    pub plagiarism_score: u8,
    /// Input tokens joined by single spaces, matched ones wrapped in markers.
    pub highlighted_text: String,
    /// Ranked sources above the source threshold, best first.
    pub matched_sources: Vec<SourceMatch>,
}

impl AnalysisResult {
    /// Scores above this percentage are reported as likely plagiarism.
    pub const FLAG_THRESHOLD: u8 = 30;

    pub fn is_flagged(&self) -> bool {
        self.plagiarism_score > Self::FLAG_THRESHOLD
    }

    /// Highlighted text split into plain and highlighted spans.
    pub fn segments(&self) -> Vec<Segment> {
        parse_markers(&self.highlighted_text)
    }
}

/// Reusable analysis entry point over a fixed corpus.
///
/// The corpus sits behind an `Arc` and is never mutated; share one instance
/// across threads freely.
#[derive(Debug, Clone)]
pub struct Analyzer {
    corpus: Arc<ReferenceCorpus>,
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(
        corpus: Arc<ReferenceCorpus>,
        config: AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        config.validate()?;
        if corpus.is_empty() {
            return Err(MatchError::EmptyCorpus.into());
        }
        Ok(Self { corpus, config })
    }

    /// Built-in corpus with default thresholds.
    pub fn builtin() -> Self {
        Self {
            corpus: Arc::new(ReferenceCorpus::builtin().clone()),
            config: AnalysisConfig::default(),
        }
    }

    /// Built-in corpus with custom thresholds.
    pub fn with_config(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        Self::new(Arc::new(ReferenceCorpus::builtin().clone()), config)
    }

    pub fn corpus(&self) -> &ReferenceCorpus {
        &self.corpus
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Rank, score, highlight and filter in one call.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_with_progress(text, |_| {})
    }

    /// [`Analyzer::analyze`], reporting progress as each passage is scored.
    pub fn analyze_with_progress<F>(&self, text: &str, on_progress: F) -> AnalysisResult
    where
        F: FnMut(ScoringProgress),
    {
        let analysis_span = MetricsSpan::start();

        let rank_span = MetricsSpan::start();
        let ranked = rank_with_progress(text, &self.corpus, on_progress);
        if let Some(span) = rank_span {
            span.record_rank(self.corpus.len());
        }

        let plagiarism_score = ranked.first().map(|m| to_percent(m.score)).unwrap_or(0);
        let highlighted_text =
            build_highlighted_text_with_threshold(text, &ranked, self.config.highlight_threshold);
        let source_threshold = self.config.source_threshold;
        let matched_sources: Vec<SourceMatch> = ranked
            .into_iter()
            .filter(|m| m.score > source_threshold)
            .collect();

        debug!(
            text_bytes = text.len(),
            plagiarism_score,
            matched_sources = matched_sources.len(),
            "analysis complete"
        );

        if let Some(span) = analysis_span {
            span.record_analysis(plagiarism_score, matched_sources.len());
        }

        AnalysisResult {
            plagiarism_score,
            highlighted_text,
            matched_sources,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::builtin()
    }
}

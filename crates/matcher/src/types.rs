use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One reference passage scored against the submitted text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceMatch {
    /// Index of the passage in the [`ReferenceCorpus`](crate::ReferenceCorpus).
    pub id: usize,
    /// Similarity in `[0, 1]`.
    pub score: f64,
    /// The reference passage itself.
    pub text: String,
}

impl SourceMatch {
    /// Score as a whole percentage, `round(score * 100)`.
    pub fn percent(&self) -> u8 {
        to_percent(self.score)
    }

    /// One-based number shown to people ("Source #1").
    pub fn source_number(&self) -> usize {
        self.id + 1
    }
}

/// Convert a `[0, 1]` score to a rounded percentage.
pub fn to_percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Progress of a ranking pass, reported after each passage is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringProgress {
    /// Passages scored so far.
    pub scored: usize,
    /// Passages in the corpus.
    pub total: usize,
}

impl ScoringProgress {
    /// Fraction of the corpus scored, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.scored as f64 / self.total as f64
    }

    pub fn is_complete(&self) -> bool {
        self.scored >= self.total
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A corpus needs at least one passage to rank against.
    #[error("reference corpus must contain at least one passage")]
    EmptyCorpus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        let m = SourceMatch {
            id: 2,
            score: 0.125,
            text: String::new(),
        };
        assert_eq!(m.percent(), 13);
        assert_eq!(m.source_number(), 3);
        assert_eq!(to_percent(0.0), 0);
        assert_eq!(to_percent(1.0), 100);
        assert_eq!(to_percent(0.994), 99);
    }

    #[test]
    fn progress_fraction() {
        let p = ScoringProgress { scored: 2, total: 5 };
        assert!((p.fraction() - 0.4).abs() < f64::EPSILON);
        assert!(!p.is_complete());
        assert!(ScoringProgress { scored: 5, total: 5 }.is_complete());
    }

    #[test]
    fn source_match_serializes_plain_fields() {
        let m = SourceMatch {
            id: 0,
            score: 1.0,
            text: "passage".into(),
        };
        let json = serde_json::to_value(&m).expect("serialize");
        assert_eq!(json, serde_json::json!({"id": 0, "score": 1.0, "text": "passage"}));
    }
}

//! # plagscan matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` scores a submitted text against a fixed [`ReferenceCorpus`] and
//! ranks every passage by bigram similarity. It is the layer the highlighter
//! and the orchestrator consume; it never stores or indexes anything.
//!
//! ## Core Types
//!
//! - [`ReferenceCorpus`]: ordered, immutable passages; the position of a
//!   passage is its `id`.
//! - [`SourceMatch`]: `{ id, score, text }` for one passage.
//! - [`ScoringProgress`]: how many passages have been scored so far.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{rank_against_corpus, ReferenceCorpus, REFERENCE_TEXTS};
//!
//! let ranked = rank_against_corpus(REFERENCE_TEXTS[3], ReferenceCorpus::builtin());
//! assert_eq!(ranked[0].id, 3);
//! assert_eq!(ranked[0].score, 1.0);
//! ```
//!
//! ## Complexity
//!
//! One bigram set per passage plus one for the query, and one set
//! intersection per passage. Corpora are expected to hold tens of passages.

mod corpus;
pub mod engine;
pub mod types;

pub use crate::corpus::{ReferenceCorpus, REFERENCE_TEXTS};
pub use crate::engine::{rank_against_corpus, rank_with_progress};
pub use crate::types::{to_percent, MatchError, ScoringProgress, SourceMatch};

//! # Bigram similarity
//!
//! Scores how much two strings overlap using Dice's coefficient over their
//! sets of character bigrams.
//!
//! ## Contract
//!
//! - Scores are `f64` in `[0, 1]`, symmetric and case-insensitive.
//! - Equal inputs give 1.0 (two empty strings included); otherwise an empty
//!   input gives 0.0.
//! - Inputs too short to have bigrams never divide by zero; they score 0.0
//!   unless equal.
//! - Pure: no I/O, no shared state, no allocation beyond the per-call sets.
//!
//! ## Example Usage
//!
//! ```
//! use similarity::{similarity, BigramProfile};
//!
//! assert_eq!(similarity("Deep learning", "deep LEARNING"), 1.0);
//! assert_eq!(similarity("a", "b"), 0.0);
//!
//! // Build the query side once when comparing against many passages.
//! let query = BigramProfile::new("neural networks");
//! let score = query.similarity(&BigramProfile::new("artificial neural networks"));
//! assert!(score > 0.5 && score < 1.0);
//! ```

mod bigram;
mod dice;

pub use crate::bigram::BigramSet;
pub use crate::dice::{similarity, BigramProfile};
